//! The "List an Item" form.

use crate::error::{Result, SessionError};
use catalog::{Condition, Listing, ListingStatus, ListingType};
use chrono::{DateTime, Utc};

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// A listing being written by its owner.
///
/// Title and description are truncated to their limits as they are set.
/// Condition has no default: the owner must pick one.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    title: String,
    description: String,
    pub category: String,
    pub condition: Option<Condition>,
    pub listing_type: ListingType,
    pub location: String,
    pub images: Vec<String>,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            condition: None,
            listing_type: ListingType::Swap,
            location: String::new(),
            images: Vec::new(),
        }
    }
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.chars().take(MAX_TITLE_CHARS).collect();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Names of the required fields still empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        if self.condition.is_none() {
            missing.push("condition");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Turn the draft into an available listing owned by `owner_id`.
    ///
    /// The id is derived from the submission time (`item_<millis>`).
    pub fn submit(&self, owner_id: &str, now: DateTime<Utc>, boost: bool) -> Result<Listing> {
        let missing = self.missing_fields();
        let Some(condition) = self.condition.filter(|_| missing.is_empty()) else {
            return Err(SessionError::MissingFields(missing));
        };

        let listing = Listing {
            id: format!("item_{}", now.timestamp_millis()),
            owner_id: owner_id.to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            condition,
            listing_type: self.listing_type,
            location: self.location.trim().to_string(),
            images: self.images.clone(),
            boosted: boost,
            status: ListingStatus::Available,
            created_at: now,
        };
        tracing::info!("Listing {} created (boosted: {})", listing.id, boost);
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn complete_draft() -> ListingDraft {
        let mut draft = ListingDraft::new();
        draft.set_title("Yoga Mat & Blocks");
        draft.set_description("High-quality yoga mat with blocks and strap.");
        draft.category = "Sports".to_string();
        draft.condition = Some(Condition::LikeNew);
        draft.location = "San Francisco, CA".to_string();
        draft
    }

    #[test]
    fn test_empty_draft_reports_all_fields() {
        let draft = ListingDraft::new();
        assert_eq!(
            draft.missing_fields(),
            vec!["title", "description", "category", "condition", "location"]
        );
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_submit() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut draft = complete_draft();
        draft.listing_type = ListingType::Donation;

        let listing = draft.submit("current_user", now, true).unwrap();
        assert_eq!(listing.id, format!("item_{}", now.timestamp_millis()));
        assert_eq!(listing.listing_type, ListingType::Donation);
        assert_eq!(listing.status, ListingStatus::Available);
        assert!(listing.boosted);
        assert_eq!(listing.created_at, now);
    }

    #[test]
    fn test_submit_rejects_missing_condition() {
        let mut draft = complete_draft();
        draft.condition = None;

        assert_eq!(
            draft.submit("current_user", Utc::now(), false).unwrap_err(),
            SessionError::MissingFields(vec!["condition"])
        );
    }

    #[test]
    fn test_title_truncated() {
        let mut draft = ListingDraft::new();
        draft.set_title(&"a".repeat(150));
        draft.set_description(&"b".repeat(600));

        assert_eq!(draft.title().len(), MAX_TITLE_CHARS);
        assert_eq!(draft.description().len(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_defaults_to_swap() {
        assert_eq!(ListingDraft::new().listing_type, ListingType::Swap);
    }
}
