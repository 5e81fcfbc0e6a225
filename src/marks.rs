//! Per-cell annotation marks
//!
//! Each cell carries one of three states: none, exclude, question. Marks are
//! player notes only; the solving engine never sees them. They ride along in
//! the saved progress entry.

use crate::mask::CELL_COUNT;

/// No annotation
pub const MARK_NONE: u8 = 0;
/// Cell ruled out by the player
pub const MARK_EXCLUDE: u8 = 1;
/// Cell the player is unsure about
pub const MARK_QUESTION: u8 = 2;

/// Fresh all-none marks array of `len` cells.
pub fn create_marks(len: usize) -> Vec<u8> {
    vec![MARK_NONE; len]
}

/// Coerce untrusted input into a valid marks array of exactly `len` cells.
///
/// Values outside the three known states fall back to none; short input is
/// padded, long input truncated.
pub fn normalize_marks(raw: &[i64], len: usize) -> Vec<u8> {
    let mut out = create_marks(len);
    for (slot, &v) in out.iter_mut().zip(raw.iter()) {
        if v == i64::from(MARK_NONE) || v == i64::from(MARK_EXCLUDE) || v == i64::from(MARK_QUESTION)
        {
            *slot = v as u8;
        }
    }
    out
}

/// Next mark in the tap cycle: none → exclude → question → none.
pub fn cycle_mark(v: u8) -> u8 {
    match v {
        MARK_NONE => MARK_EXCLUDE,
        MARK_EXCLUDE => MARK_QUESTION,
        _ => MARK_NONE,
    }
}

/// Default marks length for the 5×5 grid.
pub const MARKS_LEN: usize = CELL_COUNT;
