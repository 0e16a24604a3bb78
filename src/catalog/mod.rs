//! Generic lookup engine shared by every domain.
//!
//! A domain supplies a record type implementing [`CatalogRecord`], a
//! [`ScoreProfile`] describing its weighted fields and, where it builds
//! recommendations, [`PriorityRules`] and [`ResourceTable`]s.

pub mod engine;
pub mod filter;
pub mod level;
pub mod recommend;
pub mod scorer;
pub mod store;

pub use engine::Catalog;
pub use filter::FilterChain;
pub use level::{ClosedSet, Level, Priority};
pub use recommend::{
    GroupOrder, ImpactKeywords, PriorityRule, PriorityRules, ResourceTable, USER_IMPACT,
    one_per_group,
};
pub use scorer::{FieldMatch, Ranked, ScoreProfile, WeightedField, rank};
pub use store::{
    CatalogRecord, CsvRow, LoadReport, ParsedRows, RecordSource, RecordStore, RejectedRow,
    split_list,
};
