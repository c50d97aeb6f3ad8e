//! Integration tests for the browse pipeline.
//!
//! These tests run the pipeline against the sample catalog, served
//! through a listing source, and check the properties the browse view
//! relies on.

use catalog::{Catalog, Condition, Listing, ListingType};
use chrono::{DateTime, TimeZone, Utc};
use pipeline::{browse, FilterCriteria, SortKey};
use sources::{CatalogSource, ListingSource, Scope};
use std::collections::HashSet;
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn create_test_setup() -> Vec<Listing> {
    let catalog = Arc::new(Catalog::sample(now()));
    let source = CatalogSource::new(catalog);
    source.listings(&Scope::All).unwrap()
}

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.clone()).collect()
}

/// A spread of criteria used by the property-style tests below
fn criteria_grid() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::new(),
        FilterCriteria::new().with_query("collection"),
        FilterCriteria::new().with_query("GUITAR"),
        FilterCriteria::new().with_category("Electronics"),
        FilterCriteria::new().with_condition(Condition::LikeNew),
        FilterCriteria::new().with_listing_type(ListingType::Donation),
        FilterCriteria::new().boosted_only(),
        FilterCriteria::new()
            .with_listing_type(ListingType::Swap)
            .with_condition(Condition::Good)
            .sorted_by(SortKey::OldestFirst),
        FilterCriteria::new()
            .with_query("e")
            .boosted_only()
            .sorted_by(SortKey::NewestFirst),
        FilterCriteria::new().sorted_by(SortKey::BoostedFirst),
        FilterCriteria::new().with_category("Vehicles"),
    ]
}

#[test]
fn test_default_criteria_returns_input_unchanged() {
    let listings = create_test_setup();

    let visible = browse(&listings, &FilterCriteria::new());

    assert_eq!(visible.len(), listings.len());
    for (shown, original) in visible.iter().zip(&listings) {
        assert_eq!(*shown, original);
    }
}

#[test]
fn test_every_output_satisfies_every_active_criterion() {
    let listings = create_test_setup();

    for criteria in criteria_grid() {
        for listing in browse(&listings, &criteria) {
            assert!(
                criteria.matches(listing),
                "listing {} should not pass {:?}",
                listing.id,
                criteria
            );
        }
    }
}

#[test]
fn test_no_drops_and_no_duplicates() {
    let listings = create_test_setup();

    for criteria in criteria_grid() {
        let visible = browse(&listings, &criteria);
        let visible_ids: Vec<String> = ids(&visible);
        let unique: HashSet<&String> = visible_ids.iter().collect();
        assert_eq!(unique.len(), visible_ids.len(), "duplicates for {:?}", criteria);

        let expected = listings.iter().filter(|l| criteria.matches(l)).count();
        assert_eq!(visible.len(), expected, "dropped listings for {:?}", criteria);
    }
}

#[test]
fn test_browse_is_idempotent() {
    let listings = create_test_setup();

    for criteria in criteria_grid() {
        let first = ids(&browse(&listings, &criteria));
        let second = ids(&browse(&listings, &criteria));
        assert_eq!(first, second);
    }
}

#[test]
fn test_sort_orders() {
    let listings = create_test_setup();

    let newest = browse(&listings, &FilterCriteria::new().sorted_by(SortKey::NewestFirst));
    assert!(newest
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));

    let oldest = browse(&listings, &FilterCriteria::new().sorted_by(SortKey::OldestFirst));
    assert!(oldest
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at));

    let boosted = browse(&listings, &FilterCriteria::new().sorted_by(SortKey::BoostedFirst));
    let first_plain = boosted.iter().position(|l| !l.boosted).unwrap();
    assert!(boosted[..first_plain].iter().all(|l| l.boosted));
    assert!(boosted[first_plain..].iter().all(|l| !l.boosted));
    assert_eq!(ids(&boosted), vec!["1", "5", "7", "2", "3", "4", "6", "8"]);
}

#[test]
fn test_guitar_query_is_case_insensitive() {
    let listings = create_test_setup();

    let visible = browse(&listings, &FilterCriteria::new().with_query("GUITAR"));
    assert_eq!(ids(&visible), vec!["4"]);
    assert_eq!(visible[0].title, "Acoustic Guitar");
}

#[test]
fn test_combined_filters() {
    let listings = create_test_setup();

    let criteria = FilterCriteria::new()
        .with_listing_type(ListingType::Donation)
        .boosted_only()
        .sorted_by(SortKey::OldestFirst);
    let visible = browse(&listings, &criteria);

    // Toy collection (18h) is older than the plant collection (12h)
    assert_eq!(ids(&visible), vec!["7", "5"]);
}

#[test]
fn test_category_scope_then_browse() {
    let catalog = Arc::new(Catalog::sample(now()));
    let source = CatalogSource::new(catalog);
    let clothing = source
        .listings(&Scope::Category("Clothing".to_string()))
        .unwrap();

    let visible = browse(&clothing, &FilterCriteria::new().with_query("leather"));
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn test_empty_collection() {
    for criteria in criteria_grid() {
        assert!(browse(&[], &criteria).is_empty());
    }
}
