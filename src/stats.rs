//! Local statistics over saved progress
//!
//! Pure aggregation over the store's entry list: daily streaks, per-kind
//! solve counts, a recent-days trend window and personal bests. "Resetting"
//! stats never deletes progress — it writes a watermark timestamp under its
//! own storage key, and aggregation simply ignores entries last touched
//! before the watermark.
//!
//! Timestamp comparisons are plain string comparisons; the fixed-width
//! ISO-8601 format makes lexicographic order chronological order.

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::clock::Clock;
use crate::key::PuzzleKind;
use crate::storage::Storage;
use crate::store::ProgressEntry;

/// Storage key for the stats reset watermark.
pub const STATS_RESET_AT_KEY: &str = "kairem.stats.resetAt";

/// Upper bound on how far back a streak walk can go (~10 years).
pub const STREAK_MAX_DAYS: usize = 3660;

/// Calendar-string errors. These indicate a caller bug and are never
/// swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum YmdError {
    /// Input is not a real `YYYY-MM-DD` calendar date.
    #[error("bad ymd: {0}")]
    BadYmd(String),
}

/// Whether an entry counts toward statistics under the given watermark.
///
/// With no watermark everything counts; otherwise an entry counts when it was
/// updated or solved at-or-after the watermark.
pub fn should_include_entry(entry: &ProgressEntry, reset_at_iso: Option<&str>) -> bool {
    let Some(reset_at) = reset_at_iso else {
        return true;
    };
    let updated = entry.updated_at.as_str();
    let solved = entry.solved_at.as_deref().unwrap_or("");
    (!updated.is_empty() && updated >= reset_at) || (!solved.is_empty() && solved >= reset_at)
}

/// Shift a `YYYY-MM-DD` date by `delta_days` calendar days.
///
/// Date math is UTC-anchored, so local DST transitions cannot skip or repeat
/// a day. Malformed input fails loudly.
pub fn ymd_add_days(ymd: &str, delta_days: i64) -> Result<String, YmdError> {
    let s = ymd.trim();
    let date = parse_ymd(s)?;
    let shifted = if delta_days >= 0 {
        date.checked_add_days(Days::new(delta_days as u64))
    } else {
        date.checked_sub_days(Days::new(delta_days.unsigned_abs()))
    }
    .ok_or_else(|| YmdError::BadYmd(s.to_string()))?;
    Ok(shifted.format("%Y-%m-%d").to_string())
}

/// Strict `YYYY-MM-DD` parse: exactly ten characters, zero-padded, and a real
/// calendar date.
fn parse_ymd(s: &str) -> Result<NaiveDate, YmdError> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !shaped {
        return Err(YmdError::BadYmd(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| YmdError::BadYmd(s.to_string()))
}

/// Count consecutive solved days walking backward from `today_ymd`.
///
/// Zero when today itself is missing from the set. The walk stops after
/// `max_days` regardless (see [`STREAK_MAX_DAYS`]).
pub fn compute_daily_streak(
    solved_ymd: &HashSet<String>,
    today_ymd: &str,
    max_days: usize,
) -> Result<u32, YmdError> {
    let mut streak = 0;
    let mut cursor = today_ymd.to_string();
    for _ in 0..max_days {
        if !solved_ymd.contains(&cursor) {
            break;
        }
        streak += 1;
        cursor = ymd_add_days(&cursor, -1)?;
    }
    Ok(streak)
}

/// Played/solved counts for one puzzle kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct KindSummary {
    pub total: u32,
    pub solved: u32,
}

/// Played/solved counts per puzzle kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct KindSummaries {
    pub daily: KindSummary,
    pub seed: KindSummary,
    pub custom: KindSummary,
}

/// Count included entries and solved entries for each of the three kinds.
pub fn summarize_by_kind(entries: &[ProgressEntry], reset_at_iso: Option<&str>) -> KindSummaries {
    let mut out = KindSummaries::default();
    for e in entries {
        if !should_include_entry(e, reset_at_iso) {
            continue;
        }
        let slot = match e.kind {
            PuzzleKind::Daily => &mut out.daily,
            PuzzleKind::Seed => &mut out.seed,
            PuzzleKind::Custom => &mut out.custom,
        };
        slot.total += 1;
        if e.is_solved() {
            slot.solved += 1;
        }
    }
    out
}

/// One day in the trend window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendDay {
    pub ymd: String,
    pub played: bool,
    pub solved: bool,
    /// `None` when the day was not played or carries no usable value;
    /// negative persisted values clamp to zero.
    pub time_ms: Option<i64>,
    pub hint_count: Option<i64>,
    pub move_count: Option<i64>,
}

/// Per-day series for the `days` calendar dates ending at `today_ymd`
/// (inclusive), oldest first. Only daily-kind entries participate; at most
/// one entry matches each date.
pub fn build_daily_trend(
    today_ymd: &str,
    days: usize,
    entries: &[ProgressEntry],
    reset_at_iso: Option<&str>,
) -> Result<Vec<TrendDay>, YmdError> {
    let mut by_date: HashMap<&str, &ProgressEntry> = HashMap::new();
    for e in entries {
        if e.kind != PuzzleKind::Daily || !should_include_entry(e, reset_at_iso) {
            continue;
        }
        let Some(ymd) = e.date_ymd.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        by_date.insert(ymd, e);
    }

    let mut out = Vec::with_capacity(days);
    for i in (0..days).rev() {
        let ymd = ymd_add_days(today_ymd, -(i as i64))?;
        let e = by_date.get(ymd.as_str()).copied();
        out.push(TrendDay {
            played: e.is_some(),
            solved: e.is_some_and(ProgressEntry::is_solved),
            time_ms: clamp_metric(e.and_then(|e| e.time_ms)),
            hint_count: clamp_metric(e.and_then(|e| e.hint_count)),
            move_count: clamp_metric(e.and_then(|e| e.move_count)),
            ymd,
        });
    }
    Ok(out)
}

fn clamp_metric(v: Option<i64>) -> Option<i64> {
    v.map(|n| n.max(0))
}

/// Fastest daily solve on record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastestSolve {
    pub date_ymd: String,
    pub time_ms: i64,
}

/// Daily solve with the fewest hints on record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeastHints {
    pub date_ymd: String,
    pub hint_count: i64,
}

/// Personal bests over daily puzzles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct BestDaily {
    pub fastest: Option<FastestSolve>,
    pub least_hints: Option<LeastHints>,
}

/// Best time and best hint count over included, solved daily entries.
///
/// The two minima are independent. Ties keep the first entry seen, so the
/// result follows input order rather than a total order.
pub fn best_daily(entries: &[ProgressEntry], reset_at_iso: Option<&str>) -> BestDaily {
    let mut best = BestDaily::default();
    for e in entries {
        if e.kind != PuzzleKind::Daily || !should_include_entry(e, reset_at_iso) || !e.is_solved() {
            continue;
        }
        let date_ymd = e.date_ymd.clone().unwrap_or_default();
        if let Some(t) = clamp_metric(e.time_ms) {
            if best.fastest.as_ref().is_none_or(|f| t < f.time_ms) {
                best.fastest = Some(FastestSolve {
                    date_ymd: date_ymd.clone(),
                    time_ms: t,
                });
            }
        }
        if let Some(h) = clamp_metric(e.hint_count) {
            if best.least_hints.as_ref().is_none_or(|b| h < b.hint_count) {
                best.least_hints = Some(LeastHints {
                    date_ymd,
                    hint_count: h,
                });
            }
        }
    }
    best
}

/// Current stats reset watermark, if one has been written.
pub fn read_stats_reset_at(storage: &impl Storage) -> Option<String> {
    storage.get_item(STATS_RESET_AT_KEY).filter(|s| !s.is_empty())
}

/// Start statistics over from now. Progress entries are untouched; entries
/// last updated before the watermark simply stop counting. Returns the
/// watermark written.
pub fn reset_stats(storage: &mut impl Storage, clock: &impl Clock) -> String {
    let now = clock.now_iso();
    storage.set_item(STATS_RESET_AT_KEY, &now);
    now
}

/// Drop the watermark so every entry counts again.
pub fn clear_stats_reset(storage: &mut impl Storage) {
    storage.remove_item(STATS_RESET_AT_KEY);
}
