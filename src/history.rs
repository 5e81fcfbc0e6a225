//! Bounded linear undo/redo over checked-cell masks
//!
//! Classic two-stack history: `push` records the outgoing present on the undo
//! stack and clears redo, `undo`/`redo` walk between the stacks. Both stacks
//! are capped at [`HISTORY_LIMIT`] and trim their oldest items silently, so a
//! long session never grows without bound and never errors on overflow.

use crate::mask::{Mask, normalize_mask};

/// Maximum retained undo/redo depth. A configuration value, not an
/// architectural ceiling.
pub const HISTORY_LIMIT: usize = 200;

/// Present value plus bounded undo/redo stacks.
///
/// Created fresh per puzzle session and persisted between sessions as the
/// flat `checkedMask`/`undo`/`redo` fields of a progress entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Past states, oldest first
    pub undo: Vec<Mask>,
    /// Undone states, oldest first
    pub redo: Vec<Mask>,
    /// Current state
    pub present: Mask,
}

impl History {
    /// Fresh history with no past or future.
    pub fn new(initial_mask: i64) -> Self {
        normalize_history(&[], &[], initial_mask, HISTORY_LIMIT)
    }

    /// Record a new present value.
    ///
    /// Pushing the current present is a no-op. Otherwise the outgoing present
    /// joins the undo stack and any redo states are discarded.
    pub fn push(&mut self, next_mask: i64) {
        let next = normalize_mask(next_mask);
        if next == self.present {
            return;
        }
        self.undo.push(self.present);
        trim_to_recent(&mut self.undo, HISTORY_LIMIT);
        self.redo.clear();
        self.present = next;
    }

    /// Step back one state. Returns `false` (and changes nothing) when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.undo.pop() else {
            return false;
        };
        self.redo.push(self.present);
        trim_to_recent(&mut self.redo, HISTORY_LIMIT);
        self.present = prev;
        true
    }

    /// Step forward one undone state. Returns `false` when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push(self.present);
        trim_to_recent(&mut self.undo, HISTORY_LIMIT);
        self.present = next;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

/// Defensive reconstruction from persisted or otherwise untrusted input.
///
/// Every value is wrapped into u32 range and both stacks keep only their
/// `limit` most recent items, oldest discarded, original order preserved.
pub fn normalize_history(undo: &[i64], redo: &[i64], present: i64, limit: usize) -> History {
    let mut undo: Vec<Mask> = undo.iter().map(|&v| normalize_mask(v)).collect();
    let mut redo: Vec<Mask> = redo.iter().map(|&v| normalize_mask(v)).collect();
    trim_to_recent(&mut undo, limit);
    trim_to_recent(&mut redo, limit);
    History {
        undo,
        redo,
        present: normalize_mask(present),
    }
}

/// Keep the `limit` most recent items of a stack (newest at the end).
fn trim_to_recent(stack: &mut Vec<Mask>, limit: usize) {
    if stack.len() > limit {
        let excess = stack.len() - limit;
        stack.drain(..excess);
    }
}
