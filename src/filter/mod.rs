pub mod agents;
pub mod types;

pub use agents::{apply_agents, AgentFilter};
pub use types::{parse_price_range, FilterInput, FilterSpec};

use crate::models::Listing;
use tracing::debug;

/// Select the listings matching every active predicate of `spec`
///
/// Stable: the result keeps the catalog's relative order.
pub fn apply<'a>(catalog: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
    let matched: Vec<&Listing> = catalog
        .iter()
        .filter(|listing| matches(listing, spec))
        .collect();

    debug!(
        "Filter {:?} matched {} of {} listings",
        spec,
        matched.len(),
        catalog.len()
    );
    matched
}

/// Check a single listing against every predicate
pub fn matches(listing: &Listing, spec: &FilterSpec) -> bool {
    if !spec.search_text.is_empty() {
        let hit = [
            &listing.title,
            &listing.description,
            &listing.location,
            &listing.agent_name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&spec.search_text));
        if !hit {
            return false;
        }
    }

    if !spec.property_type.is_empty() && listing.property_type != spec.property_type {
        return false;
    }

    if !spec.location.is_empty() && !listing.location.to_lowercase().contains(&spec.location) {
        return false;
    }

    if listing.bedrooms < spec.min_bedrooms {
        return false;
    }

    if listing.price < spec.price_min {
        return false;
    }

    if let Some(max) = spec.price_max {
        if listing.price > max {
            return false;
        }
    }

    true
}
