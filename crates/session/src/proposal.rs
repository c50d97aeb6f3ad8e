//! Swap proposals and donation requests.

use crate::error::{Result, SessionError};
use catalog::{Listing, ListingId, ListingType, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Proposed,
    Accepted,
    Rejected,
    Completed,
}

/// What kind of request a proposal is, based on the target listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalKind {
    Swap,
    DonationRequest,
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalKind::Swap => f.write_str("swap proposal"),
            ProposalKind::DonationRequest => f.write_str("donation request"),
        }
    }
}

/// A request from one user for another user's listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub item_id: ListingId,
    pub requester_id: UserId,
    pub owner_id: UserId,
    /// Requester's listing offered in exchange; always `None` for donations
    pub offered_item_id: Option<ListingId>,
    pub status: TransactionStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn kind(&self) -> ProposalKind {
        if self.offered_item_id.is_some() {
            ProposalKind::Swap
        } else {
            ProposalKind::DonationRequest
        }
    }
}

/// Build a proposal for `listing`.
///
/// A swap listing needs an offered item; a donation ignores one. Blank
/// messages are dropped.
pub fn propose(
    listing: &Listing,
    requester_id: &str,
    offered_item_id: Option<&str>,
    message: &str,
    now: DateTime<Utc>,
) -> Result<Transaction> {
    let offered_item_id = match listing.listing_type {
        ListingType::Swap => Some(
            offered_item_id
                .filter(|id| !id.is_empty())
                .ok_or(SessionError::OfferRequired)?
                .to_string(),
        ),
        ListingType::Donation => None,
    };
    let message = Some(message.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    let transaction = Transaction {
        id: format!("txn_{}", now.timestamp_millis()),
        item_id: listing.id.clone(),
        requester_id: requester_id.to_string(),
        owner_id: listing.owner_id.clone(),
        offered_item_id,
        status: TransactionStatus::Proposed,
        message,
        created_at: now,
    };
    tracing::info!(
        "{} {} sent for listing {}",
        transaction.kind(),
        transaction.id,
        transaction.item_id
    );
    Ok(transaction)
}
