use serde::{Deserialize, Serialize};

/// Raw filter fields exactly as the UI hands them over
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterInput {
    /// Free-text search box
    pub search: String,
    /// Property type select, empty for "any"
    pub property_type: String,
    /// Price preset such as `700000-1300000` or `2000000+`
    pub price_range: String,
    /// Explicit lower price bound, overrides the preset
    pub price_min: String,
    /// Explicit upper price bound, overrides the preset
    pub price_max: String,
    /// Location text box
    pub location: String,
    /// Minimum bedrooms select
    pub bedrooms: String,
}

impl FilterInput {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_property_type(self, property_type: impl Into<String>) -> Self {
        Self {
            property_type: property_type.into(),
            ..self
        }
    }

    pub fn with_price_range(self, price_range: impl Into<String>) -> Self {
        Self {
            price_range: price_range.into(),
            ..self
        }
    }

    pub fn with_price_bounds(self, min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            price_min: min.into(),
            price_max: max.into(),
            ..self
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self
        }
    }

    pub fn with_bedrooms(self, bedrooms: impl Into<String>) -> Self {
        Self {
            bedrooms: bedrooms.into(),
            ..self
        }
    }
}

/// Normalized filter predicates
///
/// The default value matches every listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSpec {
    /// Lowercased substring matched against title, description, location and agent
    pub search_text: String,
    /// Exact property type, empty for any
    pub property_type: String,
    /// Lowercased substring matched against location
    pub location: String,
    /// Minimum bedrooms (0 means no constraint)
    pub min_bedrooms: u32,
    /// Inclusive lower price bound
    pub price_min: u64,
    /// Inclusive upper price bound, `None` for unbounded
    pub price_max: Option<u64>,
}

impl FilterSpec {
    /// Normalize raw UI input, replacing anything unparsable with "no constraint"
    pub fn from_input(input: &FilterInput) -> Self {
        let (preset_min, preset_max) = parse_price_range(&input.price_range);

        Self {
            search_text: input.search.to_lowercase(),
            property_type: input.property_type.clone(),
            location: input.location.to_lowercase(),
            min_bedrooms: parse_number::<u32>(&input.bedrooms).unwrap_or(0),
            price_min: parse_number(&input.price_min)
                .or(preset_min)
                .unwrap_or(0),
            price_max: parse_number(&input.price_max).or(preset_max),
        }
    }

    /// True when every field is at its match-all default
    pub fn is_match_all(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse a `min-max` / `min+` price preset into its bounds
pub fn parse_price_range(raw: &str) -> (Option<u64>, Option<u64>) {
    let raw = raw.trim();
    if raw.is_empty() {
        return (None, None);
    }

    match raw.split_once('-') {
        Some((min, max)) => (parse_number(min), parse_number(max)),
        None => (parse_number(raw.trim_end_matches('+')), None),
    }
}

/// Read the leading digits of `raw`, so select values like `3+` mean 3
fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    if end == 0 {
        return None;
    }
    raw[..end].parse().ok()
}
