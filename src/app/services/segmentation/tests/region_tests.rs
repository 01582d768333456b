//! Tests for continuity-checked region resolution

use super::*;
use crate::app::services::segmentation::{RegionResolver, accepted_regions, resolve_regions};

#[test]
fn test_seeded_day_accepts_only_continuous_regions() {
    let rows = rows_with_tails(&["1250", "1400", "9999"]);
    let seed = regions(&["1234"]);

    let resolved = resolve_regions(&rows, Some(seed.as_slice()));

    assert_eq!(rendered(&resolved), vec![Some("1250"), None, None]);
}

#[test]
fn test_unseeded_first_candidate_is_accepted() {
    let rows = rows_with_tails(&["9906", "9910", "0000", "9950", "9931"]);

    let resolved = resolve_regions(&rows, None);

    assert_eq!(
        rendered(&resolved),
        vec![Some("9906"), Some("9910"), None, None, Some("9931")]
    );
}

#[test]
fn test_placeholder_region_never_accepted_first() {
    let rows = rows_with_tails(&["0000", "0010", "9906"]);

    let resolved = resolve_regions(&rows, None);

    // 0010 becomes the anchor, so 9906 is far outside the window
    assert_eq!(rendered(&resolved), vec![None, Some("0010"), None]);
}

#[test]
fn test_placeholder_rejected_even_near_anchor() {
    let rows = rows_with_tails(&["0012", "0000", "0020"]);

    let resolved = resolve_regions(&rows, None);

    assert_eq!(rendered(&resolved), vec![Some("0012"), None, Some("0020")]);
}

#[test]
fn test_non_region_tails_are_absent() {
    let rows = rows_with_tails(&["III/1", "990", "12345", "9a06", "1.1E-03"]);

    let resolved = resolve_regions(&rows, None);

    assert!(resolved.iter().all(Option::is_none));
}

#[test]
fn test_window_is_inclusive() {
    let rows = rows_with_tails(&["1259", "1284", "1310"]);
    let seed = regions(&["1234"]);

    let resolved = resolve_regions(&rows, Some(seed.as_slice()));

    assert_eq!(rendered(&resolved), vec![Some("1259"), Some("1284"), None]);
}

#[test]
fn test_only_most_recent_seed_entry_is_used() {
    let rows = rows_with_tails(&["1010", "2010"]);
    let seed = regions(&["1000", "2000"]);

    let resolved = resolve_regions(&rows, Some(seed.as_slice()));

    assert_eq!(rendered(&resolved), vec![None, Some("2010")]);
}

#[test]
fn test_rejection_by_seed_keeps_comparing_against_seed() {
    let rows = rows_with_tails(&["1000", "5010", "5030"]);
    let seed = regions(&["5000"]);

    let resolved = resolve_regions(&rows, Some(seed.as_slice()));

    assert_eq!(rendered(&resolved), vec![None, Some("5010"), Some("5030")]);
}

#[test]
fn test_rejected_candidate_leaves_anchor_unchanged() {
    let rows = rows_with_tails(&["1000", "1100", "1020"]);

    let mut resolver = RegionResolver::new(None);
    let first = resolver.resolve_row(&rows[0]);
    let second = resolver.resolve_row(&rows[1]);
    assert_eq!(resolver.anchor(), Some(&region("1000")));
    let third = resolver.resolve_row(&rows[2]);

    assert_eq!(first, Some(region("1000")));
    assert_eq!(second, None);
    assert_eq!(third, Some(region("1020")));
    assert_eq!(resolver.anchor(), Some(&region("1020")));
}

#[test]
fn test_empty_seed_rejects_whole_day() {
    let rows = rows_with_tails(&["9901", "9905", "0000", "9906"]);
    let empty: Vec<ActiveRegion> = Vec::new();

    let seeded = resolve_regions(&rows, Some(empty.as_slice()));

    assert!(seeded.iter().all(Option::is_none));
    assert_ne!(seeded, resolve_regions(&rows, None));
}

#[test]
fn test_empty_seed_leaves_anchor_unset() {
    let rows = rows_with_tails(&["9901", "9905"]);
    let empty: Vec<ActiveRegion> = Vec::new();

    let mut resolver = RegionResolver::new(Some(empty.as_slice()));
    for row in &rows {
        assert_eq!(resolver.resolve_row(row), None);
    }
    assert_eq!(resolver.anchor(), None);
}

#[test]
fn test_accepted_regions_stay_within_window_of_each_other() {
    let rows = rows_with_tails(&[
        "1230", "1255", "1300", "1281", "0000", "1306", "1500", "1331", "1290", "1310",
    ]);
    let seed = regions(&["1210"]);

    let resolved = resolve_regions(&rows, Some(seed.as_slice()));
    let accepted = accepted_regions(&resolved);

    assert!(!accepted.is_empty());
    assert!(accepted[0].is_near(&seed[0]));
    for pair in accepted.windows(2) {
        assert!(
            pair[0].number().abs_diff(pair[1].number()) <= 25,
            "{} -> {} breaks continuity",
            pair[0],
            pair[1]
        );
    }
    assert!(accepted.iter().all(|r| !r.is_null() && r.as_str().len() == 4));
}

#[test]
fn test_one_value_per_row() {
    let rows = rows_with_tails(&["1234", "text", "1240"]);
    let resolved = resolve_regions(&rows, None);
    assert_eq!(resolved.len(), rows.len());
}

#[test]
fn test_resolution_is_deterministic() {
    let rows = rows_with_tails(&["1234", "1250", "0000", "1900", "1262"]);
    let seed = regions(&["1220"]);

    let first = resolve_regions(&rows, Some(seed.as_slice()));
    let second = resolve_regions(&rows, Some(seed.as_slice()));

    assert_eq!(first, second);
}
