use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources
/// A static fixture today, a remote feed or database tomorrow
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full listing set
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
