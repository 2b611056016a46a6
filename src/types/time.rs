use chrono::Utc;

/// Wall-clock milliseconds since the Unix epoch.
pub type Millis = i64;

pub const DAY_MS: Millis = 24 * 60 * 60 * 1000;

/// Width of the recency window used by both engines.
pub const WEEK_MS: Millis = 7 * DAY_MS;

/// Read the current wall clock.
///
/// Only callers use this (to stamp new interactions or to pick `now` for a
/// query). The engines never read the clock themselves.
pub fn now_millis() -> Millis {
    Utc::now().timestamp_millis()
}
