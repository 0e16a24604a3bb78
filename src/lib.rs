//! design-catalog: keyword lookup and recommendations over curated design,
//! UX and tech-stack reference data.
//!
//! Each domain loads one or more CSV stores at construction (falling back to
//! built-in defaults), then answers read-only queries: ranked search,
//! categorical filtering, rule-based recommendations and code or page-outline
//! generation.

pub mod catalog;
pub mod config;
pub mod domains;
pub mod error;
pub mod test_utils;

pub use catalog::{Catalog, GroupOrder, Level, LoadReport, Priority, RecordSource};
pub use config::Config;
pub use domains::DesignCatalog;
pub use error::{CatalogError, Result};
