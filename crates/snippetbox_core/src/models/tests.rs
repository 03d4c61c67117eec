//! Model-level unit tests.

use super::snippet::{view_path, Snippet};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn snippet_new_offsets_expiry_from_creation() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    for days in [1, 7, 365] {
        let snippet = Snippet::new(3, "An old silent pond", "A frog jumps in", days, created);
        assert_eq!(snippet.expires - snippet.created, Duration::days(days));
        assert_eq!(snippet.created, created);
    }
}

#[test]
fn snippet_expiry_is_exclusive_of_the_expiry_instant() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let snippet = Snippet::new(1, "t", "c", 1, created);
    assert!(!snippet.is_expired_at(created));
    assert!(!snippet.is_expired_at(created + Duration::hours(23)));
    assert!(snippet.is_expired_at(created + Duration::days(1)));
}

#[test]
fn view_path_uses_snippet_prefix() {
    assert_eq!(view_path(42), "/snippet/view/42");
    let snippet = Snippet::new(7, "t", "c", 7, Utc::now());
    assert_eq!(snippet.view_path(), "/snippet/view/7");
}
