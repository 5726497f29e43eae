//! [`YieldDataProvider`](crate::YieldDataProvider) implementations.

mod json_file;
mod static_catalog;

pub use json_file::{CatalogDocument, load_json_catalog};
pub use static_catalog::StaticCatalog;
