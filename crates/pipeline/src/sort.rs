//! Result ordering for the browse view.

use catalog::Listing;
use std::fmt;
use std::str::FromStr;

/// Order applied after filtering.
///
/// Every ordering uses a stable sort, so listings that compare equal
/// keep their input order. For `BoostedFirst` that means boosted and
/// non-boosted groups each stay in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    NewestFirst,
    OldestFirst,
    BoostedFirst,
    /// Offered by the view but not implemented; input order is kept
    Distance,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NewestFirst => "newest",
            SortKey::OldestFirst => "oldest",
            SortKey::BoostedFirst => "boosted",
            SortKey::Distance => "distance",
        }
    }

    /// Sort `listings` in place.
    pub fn sort(&self, listings: &mut [&Listing]) {
        match self {
            SortKey::NewestFirst => listings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::OldestFirst => listings.sort_by_key(|listing| listing.created_at),
            SortKey::BoostedFirst => listings.sort_by_key(|listing| !listing.boosted),
            SortKey::Distance => {
                tracing::warn!("Distance sort is not supported; keeping source order");
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort key string is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key '{}' (expected newest, oldest, boosted or distance)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::NewestFirst),
            "oldest" => Ok(SortKey::OldestFirst),
            "boosted" => Ok(SortKey::BoostedFirst),
            "distance" => Ok(SortKey::Distance),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::listing;

    // test_support::listing makes higher ids newer
    fn listings() -> Vec<Listing> {
        let a = listing("1", "A", "Books");
        let b = listing("3", "B", "Books");
        let mut c = listing("2", "C", "Books");
        let mut d = listing("4", "D", "Books");
        c.boosted = true;
        d.boosted = true;
        vec![a, b, c, d]
    }

    fn ids(sorted: &[&Listing]) -> Vec<String> {
        sorted.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_newest_first() {
        let listings = listings();
        let mut refs: Vec<&Listing> = listings.iter().collect();
        SortKey::NewestFirst.sort(&mut refs);
        assert_eq!(ids(&refs), vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_oldest_first() {
        let listings = listings();
        let mut refs: Vec<&Listing> = listings.iter().collect();
        SortKey::OldestFirst.sort(&mut refs);
        assert_eq!(ids(&refs), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_boosted_first_is_stable() {
        let listings = listings();
        let mut refs: Vec<&Listing> = listings.iter().collect();
        SortKey::BoostedFirst.sort(&mut refs);
        // boosted c, d in input order, then a, b in input order
        assert_eq!(ids(&refs), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_timestamp_ties_keep_input_order() {
        let mut first = listing("1", "First", "Books");
        let mut second = listing("1", "Second", "Books");
        first.id = "x".to_string();
        second.id = "y".to_string();
        assert_eq!(first.created_at, second.created_at);
        let listings = vec![first, second];

        for key in [SortKey::NewestFirst, SortKey::OldestFirst] {
            let mut refs: Vec<&Listing> = listings.iter().collect();
            key.sort(&mut refs);
            assert_eq!(ids(&refs), vec!["x", "y"]);
        }
    }

    #[test]
    fn test_distance_keeps_order() {
        let listings = listings();
        let mut refs: Vec<&Listing> = listings.iter().collect();
        SortKey::Distance.sort(&mut refs);
        assert_eq!(ids(&refs), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::NewestFirst);
        assert_eq!("Boosted".parse::<SortKey>().unwrap(), SortKey::BoostedFirst);
        assert!("price".parse::<SortKey>().is_err());
    }
}
