pub mod catalog;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod geo;
pub mod manager;
pub mod models;
pub mod pagination;
pub mod persistence;

pub use catalog::{AgentDirectory, CatalogSource, CatalogStore, FixtureCatalog, HttpCatalog};
pub use config::CatalogConfig;
pub use filter::{AgentFilter, FilterInput, FilterSpec};
pub use manager::{PropertyManager, ResultsView};
pub use models::{Agent, Inspection, InspectionStatus, Listing};
pub use pagination::PaginationCursor;
