//! Reconciliation of persisted progress against a freshly generated puzzle.

use crate::puzzle::{Puzzle, UNKNOWN};

use super::record::SavedRecord;

/// A digit token or the empty-slot marker. Nothing else may appear in a
/// persisted substitution or tray string.
fn is_token_char(ch: char) -> bool {
    ch == UNKNOWN || ch.is_ascii_digit()
}

/// Decide whether a persisted record can resume today's puzzle.
///
/// All four checks must hold: the record's id matches the expected game id,
/// each side's substitution string is exactly one character per slot, and
/// every character across substitutions and tray is a token character.
/// Any failure means the record is discarded whole and a fresh board starts;
/// no partial recovery is attempted.
#[must_use]
pub fn is_resumable(puzzle: &Puzzle, record: &SavedRecord, expected_id: i32) -> bool {
    if record.id != expected_id {
        return false;
    }
    if puzzle.lhs_slots() != record.lhs.chars().count() {
        return false;
    }
    if puzzle.rhs_slots() != record.rhs.chars().count() {
        return false;
    }
    record
        .lhs
        .chars()
        .chain(record.rhs.chars())
        .chain(record.reserves.chars())
        .all(is_token_char)
}
