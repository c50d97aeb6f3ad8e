//! # Session Crate
//!
//! State owned by the presentation layer for one user session. None of
//! it feeds into the browse pipeline; views refer to listings by id.
//!
//! ## Components
//!
//! - **favorites**: Favorited listing ids
//! - **onboarding**: The four-step profile wizard
//! - **inbox**: Notifications with read/unread state and tabs
//! - **listing_draft**: The "List an Item" form
//! - **proposal**: Swap proposals and donation requests
//! - **error**: Errors for rejected actions

pub mod error;
pub mod favorites;
pub mod inbox;
pub mod listing_draft;
pub mod onboarding;
pub mod proposal;

pub use error::{Result, SessionError};
pub use favorites::Favorites;
pub use inbox::{InboxTab, NotificationInbox, Route, UnknownTab};
pub use listing_draft::ListingDraft;
pub use onboarding::{OnboardingWizard, ProfileUpdate};
pub use proposal::{propose, ProposalKind, Transaction, TransactionStatus};
