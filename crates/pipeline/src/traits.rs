//! Core traits for the browse pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a listing collection.

use catalog::Listing;

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared across threads
/// - Filters only inspect a borrowed listing; they can neither mutate
///   nor drop records from the source collection
/// - There is no error path: listings are validated before they get here
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `listing` should stay in the result
    fn matches(&self, listing: &Listing) -> bool;
}
