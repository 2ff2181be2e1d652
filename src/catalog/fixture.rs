use crate::catalog::traits::CatalogSource;
use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in listing set shown on the marketing site
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The six featured listings, in display order
    pub fn listings(&self) -> Vec<Listing> {
        vec![
            listing(
                1,
                "Luxury Waterfront Villa",
                "Victoria Island, Lagos, Nigeria",
                "Stunning 5-bedroom waterfront villa with panoramic ocean views and private beach access.",
                2_850_000,
                "villa",
                (5, 6, 4500),
                "property.jpg",
                (true, false),
                &["Swimming Pool", "Beach Access", "Security", "Parking"],
                2022,
                "Premium Realty",
            ),
            listing(
                2,
                "Modern Penthouse Suite",
                "Ikoyi, Lagos, Nigeria",
                "Exclusive penthouse with 360-degree city views and private rooftop terrace.",
                1_850_000,
                "apartment",
                (3, 4, 2800),
                "buildings urban.jpg",
                (true, true),
                &["Rooftop Terrace", "Gym", "Concierge", "Parking"],
                2023,
                "Elite Properties",
            ),
            listing(
                3,
                "Executive Family Home",
                "Abuja, Nigeria",
                "Magnificent 4-bedroom family residence in prestigious neighborhood with landscaped gardens.",
                1_200_000,
                "house",
                (4, 3, 2200),
                "sharp shot of houses.jpg",
                (false, false),
                &["Garden", "Security", "Parking", "Playground"],
                2021,
                "Family Homes Ltd",
            ),
            listing(
                4,
                "Commercial Development Land",
                "Accra, Ghana",
                "Prime commercial land in rapidly developing business district with excellent road access.",
                850_000,
                "land",
                (0, 0, 8000),
                "field.jpg",
                (false, true),
                &["Road Access", "Utilities", "Zoned Commercial"],
                2024,
                "Commercial Ventures",
            ),
            listing(
                5,
                "Luxury Beachfront Apartment",
                "Cape Town, South Africa",
                "Contemporary 2-bedroom apartment with direct beach access and stunning ocean views.",
                750_000,
                "apartment",
                (2, 2, 1200),
                "skyscrapers.jpg",
                (true, false),
                &["Beach Access", "Balcony", "Security", "Parking"],
                2022,
                "Coastal Properties",
            ),
            listing(
                6,
                "Historic Townhouse",
                "Nairobi, Kenya",
                "Beautifully restored 4-bedroom townhouse combining historic charm with modern luxury.",
                650_000,
                "house",
                (4, 3, 2200),
                "new-york.jpg",
                (false, false),
                &["Historic Features", "Modern Kitchen", "Garden", "Parking"],
                2020,
                "Heritage Homes",
            ),
        ]
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn load(&self) -> Result<Vec<Listing>> {
        let listings = self.listings();
        info!("📋 Loaded {} fixture listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Fixture"
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    location: &str,
    description: &str,
    price: u64,
    property_type: &str,
    (bedrooms, bathrooms, area): (u32, u32, u32),
    image: &str,
    (featured, is_new): (bool, bool),
    amenities: &[&str],
    year_built: u16,
    agent_name: &str,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        price,
        property_type: property_type.to_string(),
        bedrooms,
        bathrooms,
        area,
        image: Some(image.to_string()),
        featured,
        is_new,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        year_built,
        agent_name: agent_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let listings = FixtureCatalog::new().listings();
        let ids: HashSet<u32> = listings.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn test_fixture_prices_in_display_order() {
        let prices: Vec<u64> = FixtureCatalog::new().listings().iter().map(|l| l.price).collect();
        assert_eq!(
            prices,
            vec![2_850_000, 1_850_000, 1_200_000, 850_000, 750_000, 650_000]
        );
    }

    #[tokio::test]
    async fn test_load_returns_fixture() {
        let source = FixtureCatalog::new();
        let listings = source.load().await.unwrap();
        assert_eq!(listings.len(), 6);
        assert_eq!(source.source_name(), "Fixture");
    }
}
