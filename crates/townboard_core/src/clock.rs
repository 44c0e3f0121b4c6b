//! Wall-clock timestamp stamping for catalog writes.
//!
//! # Responsibility
//! - Produce the RFC 3339 strings stored in `updated_at`.
//! - Parse persisted timestamps for ordering checks.
//!
//! # Invariants
//! - Stamps are UTC with microsecond precision.
//! - `now_rfc3339` never panics; formatting failures degrade to the epoch.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const EPOCH_RFC3339: &str = "1970-01-01T00:00:00Z";

/// Returns the current UTC time as an RFC 3339 string.
///
/// Sub-microsecond digits are truncated so stamps stay compact and stable
/// across serialization round-trips.
pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    let truncated = now
        .replace_nanosecond((now.nanosecond() / 1_000) * 1_000)
        .unwrap_or(now);
    truncated
        .format(&Rfc3339)
        .unwrap_or_else(|_| EPOCH_RFC3339.to_string())
}

/// Parses an RFC 3339 timestamp, returning `None` for malformed input.
pub fn parse_rfc3339(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}
