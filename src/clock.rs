//! Time source for entry timestamps
//!
//! Injected rather than read ambiently so store ordering and eviction tests
//! can drive a deterministic sequence of timestamps.

use chrono::{SecondsFormat, Utc};

/// Produces the ISO-8601 timestamps written into progress entries.
pub trait Clock {
    /// Current UTC time as a fixed-width ISO-8601 string with millisecond
    /// precision and `Z` suffix. Fixed width keeps lexicographic comparison
    /// equal to chronological comparison.
    fn now_iso(&self) -> String;
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
