pub mod agents;
pub mod fixture;
pub mod remote;
pub mod store;
pub mod traits;

pub use agents::AgentDirectory;
pub use fixture::FixtureCatalog;
pub use remote::HttpCatalog;
pub use store::CatalogStore;
pub use traits::CatalogSource;
