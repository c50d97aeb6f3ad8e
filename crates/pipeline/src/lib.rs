//! Browse pipeline for SwapIt listings.
//!
//! This crate provides:
//! - Filter trait and implementations for listing filtering
//! - FilterPipeline for composing filters
//! - SortKey for ordering the visible listings
//! - FilterCriteria, the user's current selections
//! - `browse`, which runs the whole thing
//!
//! ## Architecture
//! The pipeline processes listings in stages:
//! 1. FilterCriteria builds a FilterPipeline from its active selections
//! 2. Filters drop listings that fail any active criterion
//! 3. The SortKey orders what is left
//!
//! Everything works on borrowed listings and is re-run from scratch
//! whenever the criteria change.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{browse, FilterCriteria, SortKey};
//!
//! let criteria = FilterCriteria::new()
//!     .with_query("guitar")
//!     .with_listing_type(ListingType::Swap)
//!     .sorted_by(SortKey::NewestFirst);
//!
//! let visible = browse(catalog.listings(), &criteria);
//! ```

pub mod browse;
pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod sort;
pub mod traits;

// Re-export main types
pub use browse::browse;
pub use criteria::{parse_selector, FilterCriteria};
pub use filter_pipeline::FilterPipeline;
pub use sort::{SortKey, UnknownSortKey};
pub use traits::Filter;
