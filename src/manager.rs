use crate::catalog::CatalogStore;
use crate::config::CatalogConfig;
use crate::filter::{self, FilterInput, FilterSpec};
use crate::geo::{self, Coordinates, LocationVerification};
use crate::models::{Inspection, Listing};
use crate::pagination::PaginationCursor;
use crate::persistence::{
    keys, save_json, FavoritesSet, InspectionLog, KeyValueStore, SearchHistory,
};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

/// What the render boundary needs to draw the listing grid
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView<'a> {
    pub listings: Vec<&'a Listing>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub has_more: bool,
    pub remaining: usize,
}

impl ResultsView<'_> {
    pub fn summary(&self) -> String {
        format!("{} properties found", self.filtered_count)
    }

    pub fn load_more_label(&self) -> String {
        format!("Load More ({} remaining)", self.remaining)
    }
}

/// Owns the catalog, the active filter, pagination and the user's saved state
///
/// Every inbound UI event runs to completion before the next one; a filter
/// change always resets pagination before results are read again.
pub struct PropertyManager<S: KeyValueStore> {
    catalog: CatalogStore,
    input: FilterInput,
    spec: FilterSpec,
    // Indices into the catalog, in catalog order
    filtered: Vec<usize>,
    cursor: PaginationCursor,
    favorites: FavoritesSet,
    history: SearchHistory,
    inspections: InspectionLog,
    geo_tolerance_m: f64,
    store: S,
}

impl<S: KeyValueStore> PropertyManager<S> {
    pub fn new(catalog: CatalogStore, store: S, config: &CatalogConfig) -> Self {
        let favorites = FavoritesSet::load(&store);
        let history = SearchHistory::load(&store, config.search_history_capacity);
        let inspections = InspectionLog::load(&store);
        info!(
            "Property manager ready: {} listings, {} favorites, {} recent searches",
            catalog.len(),
            favorites.len(),
            history.len()
        );

        let filtered = (0..catalog.len()).collect();
        Self {
            catalog,
            input: FilterInput::default(),
            spec: FilterSpec::default(),
            filtered,
            cursor: PaginationCursor::new(config.page_size),
            favorites,
            history,
            inspections,
            geo_tolerance_m: config.geo_tolerance_meters,
            store,
        }
    }

    /// Any filter field changed: re-filter and go back to the first page
    pub fn on_filter_input_changed(&mut self, input: FilterInput) {
        self.spec = FilterSpec::from_input(&input);
        self.input = input;
        self.cursor.reset();

        let listings = self.catalog.listings();
        self.filtered = listings
            .iter()
            .enumerate()
            .filter(|(_, listing)| filter::matches(listing, &self.spec))
            .map(|(index, _)| index)
            .collect();

        info!(
            "{} of {} listings match current filters",
            self.filtered.len(),
            listings.len()
        );
    }

    /// The debounced search box settled: remember the term, then filter
    pub fn on_search_committed(&mut self, input: FilterInput) {
        self.history.record(&input.search, &mut self.store);
        self.on_filter_input_changed(input);
    }

    /// Reveal the next page; false when nothing more is left
    pub fn on_load_more_clicked(&mut self) -> bool {
        self.cursor.advance(self.filtered.len())
    }

    /// Toggle a favorite; returns whether the listing is now saved
    pub fn on_favorite_toggled(&mut self, id: u32) -> bool {
        self.favorites.toggle(id, &mut self.store)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    pub fn view(&self) -> ResultsView<'_> {
        let listings = self.catalog.listings();
        let filtered_count = self.filtered.len();

        ResultsView {
            listings: self
                .cursor
                .visible_slice(&self.filtered)
                .iter()
                .map(|&index| &listings[index])
                .collect(),
            filtered_count,
            total_count: listings.len(),
            has_more: self.cursor.has_more(filtered_count),
            remaining: self.cursor.remaining(filtered_count),
        }
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.filtered.len())
    }

    pub fn pages_revealed(&self) -> usize {
        self.cursor.pages_revealed()
    }

    pub fn filter_input(&self) -> &FilterInput {
        &self.input
    }

    pub fn filter_spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn search_history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn inspections(&self) -> &InspectionLog {
        &self.inspections
    }

    /// Inspections booked by the signed-in user
    pub fn inspections_for<'a>(&'a self, user_email: &'a str) -> Vec<&'a Inspection> {
        self.inspections.for_user(user_email).collect()
    }

    /// Recent searches offered as completions for the search box
    pub fn search_suggestions(&self, prefix: &str) -> Vec<&str> {
        self.history.suggestions(prefix)
    }

    /// Check a photo's GPS position against the claimed listing location
    pub fn verify_photo_location(
        &self,
        claimed: Coordinates,
        photo: Coordinates,
    ) -> LocationVerification {
        let result = geo::verify_location(claimed, photo, self.geo_tolerance_m);
        info!(
            "Photo taken {:.0} m from claimed location (tolerance {:.0} m): {}",
            result.distance_m,
            result.tolerance_m,
            if result.verified { "verified" } else { "rejected" }
        );
        result
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open a listing's detail page, remembering it as the selected property
    pub fn view_details(&mut self, id: u32) -> Option<&Listing> {
        let listing = self.catalog.get(id)?;
        save_json(&mut self.store, keys::SELECTED_PROPERTY, listing);
        debug!("Selected listing {}", id);
        Some(listing)
    }

    pub fn schedule_inspection(
        &mut self,
        id: u32,
        user_email: Option<&str>,
        date: &str,
    ) -> Result<Inspection> {
        let listing = self
            .catalog
            .get(id)
            .with_context(|| format!("Unknown listing {}", id))?;
        self.inspections
            .schedule(listing, user_email, date, Utc::now(), &mut self.store)
    }
}
