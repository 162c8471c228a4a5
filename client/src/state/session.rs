//! Client-local login session persisted in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The webhooks own every account decision; the browser only remembers that a
//! login succeeded. That memory is a small JSON record under
//! [`SESSION_STORAGE_KEY`] which expires after [`SESSION_TTL_MS`]. The record is
//! not verified by any server, so it gates navigation and nothing else.
//!
//! DESIGN
//! ======
//! Classification (`check_stored`) and path handling are pure functions over
//! the raw stored string and an injected clock, so they are unit-testable
//! without a browser. `restore` and `persist` are the only storage-touching
//! entry points.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::util::storage;

/// `localStorage` key holding the serialized [`SessionRecord`].
pub const SESSION_STORAGE_KEY: &str = "outliersSession";

/// Maximum record age before it is treated as expired (24 hours).
pub const SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Page name recorded for the landing route.
pub const HOME_PAGE: &str = "home";

/// Page name that triggers the resume-on-load redirect.
pub const DASHBOARD_PAGE: &str = "dashboard";

/// Persisted session record.
///
/// Written with strict types, but read leniently: the stored value is plain
/// browser state, so truthy flags, float or numeric-string timestamps and
/// non-string pages are accepted instead of discarding the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "truthy")]
    pub is_logged_in: bool,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "epoch_ms")]
    pub timestamp: Option<i64>,
    #[serde(default, deserialize_with = "page_name")]
    pub last_page: String,
}

/// Truthiness of an arbitrary JSON value (`0`, `""`, `false`, `null` are false).
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_normal() || f.is_subnormal()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Millisecond timestamp from an integer, a float or a numeric string.
/// Anything else reads as missing.
fn epoch_ms<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    #[allow(clippy::cast_possible_truncation)]
    let from_float = |f: f64| f.is_finite().then(|| f as i64);
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(from_float)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(from_float),
        _ => None,
    })
}

/// Page name when stored as a string, empty otherwise.
fn page_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

impl SessionRecord {
    /// A logged-in record stamped at `now_ms`.
    #[must_use]
    pub fn new(last_page: impl Into<String>, now_ms: i64) -> Self {
        Self { is_logged_in: true, timestamp: Some(now_ms), last_page: last_page.into() }
    }

    /// Whether the record still counts as logged in at `now_ms`.
    ///
    /// A zero timestamp counts as missing. Age exactly equal to the TTL is
    /// already expired.
    #[must_use]
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        match self.timestamp {
            Some(ts) if self.is_logged_in && ts != 0 => now_ms.saturating_sub(ts) < SESSION_TTL_MS,
            _ => false,
        }
    }
}

/// Outcome of inspecting the stored session on load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    /// Nothing stored.
    Absent,
    /// Parsed, logged in and still within the TTL.
    Active(SessionRecord),
    /// Parsed but not marked logged in, or missing its timestamp. Left as is.
    Inactive,
    /// Parsed and logged in, but older than the TTL. Must be removed.
    Expired,
    /// Not valid JSON for a record. Must be removed.
    Corrupt,
}

impl StoredSession {
    /// Whether the stored value should be deleted.
    #[must_use]
    pub fn should_clear(&self) -> bool {
        matches!(self, Self::Expired | Self::Corrupt)
    }
}

/// Classify the raw stored string at `now_ms`.
#[must_use]
pub fn check_stored(raw: Option<&str>, now_ms: i64) -> StoredSession {
    let Some(raw) = raw else {
        return StoredSession::Absent;
    };
    let Ok(record) = serde_json::from_str::<SessionRecord>(raw) else {
        return StoredSession::Corrupt;
    };
    if !record.is_logged_in || record.timestamp.is_none_or(|ts| ts == 0) {
        return StoredSession::Inactive;
    }
    if record.is_fresh(now_ms) {
        StoredSession::Active(record)
    } else {
        StoredSession::Expired
    }
}

/// Page name recorded for a router path: the path without its leading slash,
/// or [`HOME_PAGE`] for the root.
#[must_use]
pub fn last_page_for_path(path: &str) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() { HOME_PAGE.to_owned() } else { trimmed.to_owned() }
}

/// Whether an active session should jump from the landing page to the dashboard.
#[must_use]
pub fn should_resume_dashboard(record: &SessionRecord, path: &str) -> bool {
    record.last_page == DASHBOARD_PAGE && path == "/"
}

/// Reactive login flag shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
}

/// Load the stored session, dropping expired or corrupt records.
///
/// Returns the record only when it is active.
pub fn restore(now_ms: i64) -> Option<SessionRecord> {
    let raw = storage::load_raw(SESSION_STORAGE_KEY);
    match check_stored(raw.as_deref(), now_ms) {
        StoredSession::Active(record) => Some(record),
        other => {
            if other.should_clear() {
                #[cfg(feature = "hydrate")]
                log::info!("clearing stored session: {other:?}");
                storage::remove(SESSION_STORAGE_KEY);
            }
            None
        }
    }
}

/// Write or clear the stored session.
///
/// With `logged_in`, a fresh record is written whose `lastPage` is `page`, or
/// the page derived from `current_path` when no page is given. Returns the
/// written record.
pub fn persist(logged_in: bool, page: Option<&str>, current_path: &str, now_ms: i64) -> Option<SessionRecord> {
    if !logged_in {
        storage::remove(SESSION_STORAGE_KEY);
        return None;
    }
    let last_page = page.map_or_else(|| last_page_for_path(current_path), str::to_owned);
    let record = SessionRecord::new(last_page, now_ms);
    storage::save_json(SESSION_STORAGE_KEY, &record);
    Some(record)
}
