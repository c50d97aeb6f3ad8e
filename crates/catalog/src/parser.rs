//! Parser for catalog fixture files.
//!
//! Fixtures are JSON arrays:
//! - listings.json: `[{ "id", "owner_id", "title", "description", "category",
//!   "condition", "listing_type", "location", "images", "boosted", "status",
//!   "created_at" }, ...]`
//! - notifications.json: `[{ "id", "user_id", "kind", "title", "content",
//!   "read", "related_id", "created_at" }, ...]`
//!
//! Timestamps are RFC 3339. Enum values use snake_case (`like_new`,
//! `swap_request`). Any decoding failure is reported with the file name.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
        file,
        reason: e.to_string(),
    })
}

/// Parse a listings.json fixture
pub fn parse_listings(path: &Path) -> Result<Vec<Listing>> {
    read_json_array(path)
}

/// Parse a notifications.json fixture
pub fn parse_notifications(path: &Path) -> Result<Vec<Notification>> {
    read_json_array(path)
}
