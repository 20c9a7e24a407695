//! UTC day bucketing.
//!
//! The subgraph records one aggregate price per token per day, keyed by the
//! unix timestamp of 00:00:00 UTC. Queries must use the exact bucket start.

use chrono::{DateTime, NaiveTime, Utc};

/// Unix timestamp of 00:00:00 UTC on the day containing `instant`.
pub fn utc_day_start(instant: DateTime<Utc>) -> i64 {
    instant
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp()
}

/// Day bucket start for the current day.
pub fn current_day_start() -> i64 {
    utc_day_start(Utc::now())
}
