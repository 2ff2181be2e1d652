use crate::catalog::traits::CatalogSource;
use crate::models::Listing;
use std::collections::HashSet;
use tracing::{info, warn};

/// Canonical, read-only listing set
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    listings: Vec<Listing>,
}

impl CatalogStore {
    /// Build a store from loaded listings
    ///
    /// Later records with an id already seen are dropped so ids stay unique.
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut seen = HashSet::new();
        let listings: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| {
                let fresh = seen.insert(listing.id);
                if !fresh {
                    warn!("Dropping listing with duplicate id {}", listing.id);
                }
                fresh
            })
            .collect();

        Self { listings }
    }

    /// Load from a source, substituting an empty catalog if it fails
    pub async fn load_from(source: &dyn CatalogSource) -> Self {
        match source.load().await {
            Ok(listings) => {
                info!(
                    "Catalog loaded from {}: {} listings",
                    source.source_name(),
                    listings.len()
                );
                Self::new(listings)
            }
            Err(err) => {
                warn!(
                    "Catalog unavailable from {}: {:#}",
                    source.source_name(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
