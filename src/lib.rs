pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::product::{NewProduct, Product, ProductSubmission, ProductType};
pub use domain::validation::ValidationError;
pub use storage::catalog::CatalogStore;
