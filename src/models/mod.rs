use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Core listing data model
///
/// Field aliases accept the feed format used by the marketing site
/// (`type`, `agent`, `new`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub description: String,
    pub price: u64,
    #[serde(alias = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, alias = "new")]
    pub is_new: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub year_built: u16,
    #[serde(alias = "agent")]
    pub agent_name: String,
}

/// Lifecycle of an inspection request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A scheduled property inspection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: i64,
    pub property_id: u32,
    pub property_name: String,
    pub date: NaiveDate,
    pub status: InspectionStatus,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
}

/// An agent in the public directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: u32,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub rating: f32,
    pub reviews: u32,
    #[serde(alias = "specialty")]
    pub specialties: Vec<String>,
    pub location: String,
    pub experience: String,
    #[serde(alias = "properties")]
    pub listings_handled: u32,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub verified: bool,
    pub description: String,
}
