use super::*;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const NOW: i64 = 1_760_000_000_000;

fn stored(record: &SessionRecord) -> String {
    serde_json::to_string(record).unwrap()
}

// =============================================================
// Freshness boundary
// =============================================================

#[test]
fn record_just_under_a_day_old_is_fresh() {
    let record = SessionRecord::new("dashboard", NOW - (23 * HOUR_MS + 59 * MINUTE_MS));
    assert!(record.is_fresh(NOW));
}

#[test]
fn record_just_over_a_day_old_is_expired() {
    let record = SessionRecord::new("dashboard", NOW - (24 * HOUR_MS + MINUTE_MS));
    assert!(!record.is_fresh(NOW));
}

#[test]
fn record_exactly_a_day_old_is_expired() {
    let record = SessionRecord::new("home", NOW - SESSION_TTL_MS);
    assert!(!record.is_fresh(NOW));
}

#[test]
fn logged_out_record_is_never_fresh() {
    let mut record = SessionRecord::new("home", NOW);
    record.is_logged_in = false;
    assert!(!record.is_fresh(NOW));
}

#[test]
fn zero_timestamp_is_never_fresh() {
    let record = SessionRecord::new("home", 0);
    assert!(!record.is_fresh(NOW));
}

// =============================================================
// Stored value classification
// =============================================================

#[test]
fn check_stored_absent_when_nothing_saved() {
    assert_eq!(check_stored(None, NOW), StoredSession::Absent);
}

#[test]
fn check_stored_active_for_fresh_record() {
    let record = SessionRecord::new("dashboard", NOW - HOUR_MS);
    assert_eq!(check_stored(Some(&stored(&record)), NOW), StoredSession::Active(record));
}

#[test]
fn check_stored_expired_for_stale_record() {
    let record = SessionRecord::new("dashboard", NOW - 25 * HOUR_MS);
    let outcome = check_stored(Some(&stored(&record)), NOW);
    assert_eq!(outcome, StoredSession::Expired);
    assert!(outcome.should_clear());
}

#[test]
fn check_stored_corrupt_for_malformed_json() {
    let outcome = check_stored(Some("{not json"), NOW);
    assert_eq!(outcome, StoredSession::Corrupt);
    assert!(outcome.should_clear());
}

#[test]
fn check_stored_inactive_when_logged_out_flag() {
    let raw = r#"{"isLoggedIn":false,"timestamp":1760000000000,"lastPage":"home"}"#;
    let outcome = check_stored(Some(raw), NOW);
    assert_eq!(outcome, StoredSession::Inactive);
    assert!(!outcome.should_clear());
}

#[test]
fn check_stored_inactive_when_timestamp_missing() {
    let raw = r#"{"isLoggedIn":true,"lastPage":"dashboard"}"#;
    assert_eq!(check_stored(Some(raw), NOW), StoredSession::Inactive);
}

#[test]
fn check_stored_accepts_truthy_flag_and_float_timestamp() {
    let raw = r#"{"isLoggedIn":1,"timestamp":1.76e12,"lastPage":"dashboard"}"#;
    match check_stored(Some(raw), NOW + HOUR_MS) {
        StoredSession::Active(record) => {
            assert!(record.is_logged_in);
            assert_eq!(record.timestamp, Some(NOW));
            assert_eq!(record.last_page, "dashboard");
        }
        other => panic!("expected active session, got {other:?}"),
    }
}

#[test]
fn check_stored_accepts_numeric_string_timestamp() {
    let raw = r#"{"isLoggedIn":"yes","timestamp":"1760000000000","lastPage":"home"}"#;
    assert!(matches!(check_stored(Some(raw), NOW + HOUR_MS), StoredSession::Active(_)));
}

#[test]
fn check_stored_falsy_flag_is_inactive() {
    for flag in ["0", "\"\"", "null"] {
        let raw = format!(r#"{{"isLoggedIn":{flag},"timestamp":1760000000000,"lastPage":"home"}}"#);
        assert_eq!(check_stored(Some(&raw), NOW), StoredSession::Inactive, "flag {flag}");
    }
}

#[test]
fn check_stored_non_string_page_reads_as_empty() {
    let raw = r#"{"isLoggedIn":true,"timestamp":1760000000000,"lastPage":7}"#;
    match check_stored(Some(raw), NOW) {
        StoredSession::Active(record) => assert_eq!(record.last_page, ""),
        other => panic!("expected active session, got {other:?}"),
    }
}

#[test]
fn record_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(SessionRecord::new("tracks", 42)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "isLoggedIn": true, "timestamp": 42, "lastPage": "tracks" })
    );
}

// =============================================================
// Paths and resume
// =============================================================

#[test]
fn last_page_strips_leading_slash() {
    assert_eq!(last_page_for_path("/tracks"), "tracks");
    assert_eq!(last_page_for_path("/dashboard"), "dashboard");
}

#[test]
fn last_page_for_root_is_home() {
    assert_eq!(last_page_for_path("/"), "home");
    assert_eq!(last_page_for_path(""), "home");
}

#[test]
fn resume_dashboard_only_from_landing_page() {
    let record = SessionRecord::new("dashboard", NOW);
    assert!(should_resume_dashboard(&record, "/"));
    assert!(!should_resume_dashboard(&record, "/tracks"));
}

#[test]
fn resume_dashboard_requires_dashboard_last_page() {
    let record = SessionRecord::new("tracks", NOW);
    assert!(!should_resume_dashboard(&record, "/"));
}

// =============================================================
// Storage entry points (no-op storage outside the browser)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn persist_logged_in_uses_explicit_page() {
    let record = persist(true, Some("dashboard"), "/login", NOW).unwrap();
    assert_eq!(record, SessionRecord::new("dashboard", NOW));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn persist_logged_in_derives_page_from_path() {
    let record = persist(true, None, "/tracks", NOW).unwrap();
    assert_eq!(record.last_page, "tracks");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn persist_logged_out_returns_none() {
    assert!(persist(false, Some("dashboard"), "/", NOW).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_without_storage_is_none() {
    assert!(restore(NOW).is_none());
}
