//! Filter implementations for the browse pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod boosted_only;
pub mod category;
pub mod condition;
pub mod listing_type;
pub mod text_query;

// Re-export for convenience
pub use boosted_only::BoostedOnlyFilter;
pub use category::CategoryFilter;
pub use condition::ConditionFilter;
pub use listing_type::ListingTypeFilter;
pub use text_query::TextQueryFilter;
