//! User-selected browse criteria.
//!
//! `FilterCriteria` is plain session state: created with no filters when
//! the browse view opens, edited by user input, dropped when the view
//! closes. It knows how to turn itself into a `FilterPipeline` holding
//! only the filters that are actually active.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::*;
use crate::sort::SortKey;
use catalog::{Condition, Listing, ListingType};

/// Selector strings meaning "no restriction"
const ANY_SENTINELS: [&str; 4] = ["", "any", "all", "all categories"];

/// Interpret a selector value; the "any" sentinels map to `None`.
///
/// ```ignore
/// assert_eq!(parse_selector("All Categories"), None);
/// assert_eq!(parse_selector("Books"), Some("Books"));
/// ```
pub fn parse_selector(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if ANY_SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
    {
        None
    } else {
        Some(trimmed)
    }
}

/// Active filter and sort selections for one browse session.
///
/// `None` on a selector means "any". A `None` sort keeps the order the
/// listing source supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
    pub condition: Option<Condition>,
    pub listing_type: Option<ListingType>,
    pub boosted_only: bool,
    pub sort: Option<SortKey>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = Some(listing_type);
        self
    }

    pub fn boosted_only(mut self) -> Self {
        self.boosted_only = true;
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Number of active filters (sort does not count)
    pub fn active_filter_count(&self) -> usize {
        [
            !self.query.is_empty(),
            self.category.is_some(),
            self.condition.is_some(),
            self.listing_type.is_some(),
            self.boosted_only,
        ]
        .into_iter()
        .filter(|&active| active)
        .count()
    }

    /// True when no filter and no sort is selected
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Reset every selection ("Clear All Filters")
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build a pipeline holding one filter per active criterion.
    ///
    /// Inactive criteria add no filter, so a default criteria value
    /// yields an empty pipeline.
    pub fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if !self.query.is_empty() {
            pipeline = pipeline.add_filter(TextQueryFilter::new(&self.query));
        }
        if let Some(category) = &self.category {
            pipeline = pipeline.add_filter(CategoryFilter::new(category.clone()));
        }
        if let Some(condition) = self.condition {
            pipeline = pipeline.add_filter(ConditionFilter::new(condition));
        }
        if let Some(listing_type) = self.listing_type {
            pipeline = pipeline.add_filter(ListingTypeFilter::new(listing_type));
        }
        if self.boosted_only {
            pipeline = pipeline.add_filter(BoostedOnlyFilter);
        }
        pipeline
    }

    /// Whether a single listing satisfies every active criterion
    pub fn matches(&self, listing: &Listing) -> bool {
        self.pipeline().matches(listing)
    }
}
