//! Timestamp parsing shared by the hub and the demo configuration.

use chrono::{DateTime, Utc};

use crate::error::{DomainError, DomainResult};

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::validation(format!("invalid timestamp {raw:?}: {e}")))
}
