//! Types shared by listing sources.

use anyhow::Result;
use catalog::{Listing, UserId};

/// Coarse scope a caller can ask a listing source for.
///
/// Fine-grained filtering belongs to the browse pipeline; a scope only
/// narrows what gets fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Category(String),
    Owner(UserId),
}

impl Scope {
    pub fn includes(&self, listing: &Listing) -> bool {
        match self {
            Scope::All => true,
            Scope::Category(category) => listing.category == *category,
            Scope::Owner(owner) => listing.owner_id == *owner,
        }
    }
}

/// Supplies the immutable listing collection the browse pipeline filters.
///
/// ## Design Note
/// - `Send + Sync` lets a source be shared behind an `Arc`
/// - Results are owned so a source may fetch from anywhere
/// - Order is creation order as the source stores it
pub trait ListingSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch every listing inside `scope`
    fn listings(&self, scope: &Scope) -> Result<Vec<Listing>>;
}
