use crate::traits::Filter;
use catalog::{Condition, Listing};

/// Keeps listings in exactly the selected condition.
pub struct ConditionFilter {
    condition: Condition,
}

impl ConditionFilter {
    pub fn new(condition: Condition) -> Self {
        Self { condition }
    }
}

impl Filter for ConditionFilter {
    fn name(&self) -> &str {
        "ConditionFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.condition == self.condition
    }
}
