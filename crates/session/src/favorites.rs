//! Favorited listings.

use catalog::ListingId;
use std::collections::HashSet;

/// Listing ids the user has favorited.
///
/// Owned by the presentation layer and keyed by id only; the browse
/// pipeline never sees it.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: HashSet<ListingId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a listing's favorite state; returns true if it is now favorited
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListingId> {
        self.ids.iter()
    }
}
