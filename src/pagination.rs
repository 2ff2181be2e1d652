use tracing::debug;

/// Incrementally growing window over a filtered result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: usize,
    pages_revealed: usize,
}

impl PaginationCursor {
    /// Create a cursor showing the first page. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages_revealed: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pages_revealed(&self) -> usize {
        self.pages_revealed
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.pages_revealed = 1;
    }

    /// Reveal one more page; returns false when everything is already visible
    pub fn advance(&mut self, filtered_count: usize) -> bool {
        if !self.has_more(filtered_count) {
            return false;
        }
        self.pages_revealed += 1;
        debug!(
            "Revealed page {} ({} of {} visible)",
            self.pages_revealed,
            self.visible_count(filtered_count),
            filtered_count
        );
        true
    }

    pub fn visible_count(&self, filtered_count: usize) -> usize {
        self.pages_revealed
            .saturating_mul(self.page_size)
            .min(filtered_count)
    }

    pub fn has_more(&self, filtered_count: usize) -> bool {
        self.visible_count(filtered_count) < filtered_count
    }

    pub fn remaining(&self, filtered_count: usize) -> usize {
        filtered_count - self.visible_count(filtered_count)
    }

    /// The visible prefix of `filtered`
    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.visible_count(filtered.len())]
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_count_grows_by_page() {
        let items: Vec<u32> = (0..25).collect();
        let mut cursor = PaginationCursor::new(9);

        let mut previous: Vec<u32> = Vec::new();
        for k in 0..5 {
            let visible = cursor.visible_slice(&items);
            assert_eq!(visible.len(), (9 * (k + 1)).min(25));
            assert!(visible.starts_with(&previous));
            previous = visible.to_vec();
            cursor.advance(items.len());
        }
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = PaginationCursor::new(2);
        assert!(cursor.advance(3));
        assert!(!cursor.has_more(3));
        assert!(!cursor.advance(3));
        assert_eq!(cursor.pages_revealed(), 2);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut cursor = PaginationCursor::new(2);
        cursor.advance(10);
        cursor.advance(10);
        cursor.reset();
        assert_eq!(cursor.pages_revealed(), 1);
        assert_eq!(cursor.visible_count(10), 2);
        assert_eq!(cursor.remaining(10), 8);
    }

    #[test]
    fn test_empty_and_short_results() {
        let cursor = PaginationCursor::new(9);
        let empty: [u32; 0] = [];
        assert!(cursor.visible_slice(&empty).is_empty());
        assert!(!cursor.has_more(0));
        assert_eq!(cursor.visible_slice(&[1, 2, 3]), &[1, 2, 3]);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let cursor = PaginationCursor::new(0);
        assert_eq!(cursor.page_size(), 1);
        assert_eq!(cursor.visible_count(5), 1);
    }
}
