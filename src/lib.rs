//! Kairem save data - offline-first progress, undo history and local stats
//!
//! Core modules:
//! - `mask`: checked-cell bitmask normalization for the 5×5 grid
//! - `marks`: per-cell annotation marks
//! - `history`: bounded linear undo/redo
//! - `key`: stable per-puzzle storage keys
//! - `storage`: pluggable storage backends (LocalStorage on web)
//! - `store`: versioned, capacity-bounded progress store
//! - `stats`: streaks, per-kind summaries, trend windows, personal bests
//!
//! Everything is synchronous and fail-open: when the storage medium is
//! missing or corrupt, reads come back empty and writes are dropped, so play
//! continues even if nothing persists. Only caller bugs (bad key arguments,
//! malformed calendar strings) surface as errors.

pub mod clock;
pub mod history;
pub mod key;
pub mod marks;
pub mod mask;
pub mod stats;
pub mod storage;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use history::{HISTORY_LIMIT, History, normalize_history};
pub use key::{KeyError, PuzzleKeyInfo, PuzzleKind, make_puzzle_key};
pub use marks::{MARK_EXCLUDE, MARK_NONE, MARK_QUESTION, create_marks, cycle_mark, normalize_marks};
pub use mask::{CELL_COUNT, GRID_SIZE, Mask, normalize_mask};
pub use stats::{
    BestDaily, KindSummaries, KindSummary, STATS_RESET_AT_KEY, TrendDay, YmdError, best_daily,
    build_daily_trend, clear_stats_reset, compute_daily_streak, read_stats_reset_at, reset_stats,
    should_include_entry, summarize_by_kind, ymd_add_days,
};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, Storage};
pub use store::{
    PROGRESS_MAX_ENTRIES, PROGRESS_STORAGE_KEY, PROGRESS_STORE_VERSION, ProgressEntry,
    ProgressStore,
};
