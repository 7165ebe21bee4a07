//! The live token layout for one tier's puzzle.

use serde::{Deserialize, Serialize};

use crate::core::{Location, Zone};
use crate::eval::evaluate;
use crate::progress::SavedRecord;
use crate::puzzle::{empty_substitutions, substitute, Puzzle, UNKNOWN};

/// Where a board stands after its latest relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// At least one slot is still empty.
    Solving,
    /// Every slot filled and both sides evaluate equal.
    Passed,
    /// Every slot filled but the sides differ. Not terminal: emptying a
    /// slot returns to `Solving`.
    Failed,
}

/// One tier's in-play state: the puzzle plus the current token layout.
///
/// `left_subs[i]`/`right_subs[i]` hold the token in that side's i-th slot,
/// or [`UNKNOWN`] for an empty slot; `reserves` is the tray. Across the
/// three pools the token multiset never changes for the life of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub puzzle: Puzzle,
    pub left_subs: String,
    pub right_subs: String,
    pub reserves: String,
    pub status: Status,
    /// Epoch millis when this board was first created.
    pub start_time: i64,
    /// Display string captured when the board passed, empty until then.
    pub time_to_solve: String,
}

impl Board {
    /// A board with every slot empty and the puzzle's generated tray.
    #[must_use]
    pub fn fresh(puzzle: Puzzle, now_millis: i64) -> Self {
        let left_subs = empty_substitutions(&puzzle.lhs);
        let right_subs = empty_substitutions(&puzzle.rhs);
        let reserves = puzzle.reserves.clone();
        Self {
            puzzle,
            left_subs,
            right_subs,
            reserves,
            status: Status::Solving,
            start_time: now_millis,
            time_to_solve: String::new(),
        }
    }

    /// A board adopting a validated record's layout and timing.
    ///
    /// Status comes from the record: solved means passed; otherwise a fully
    /// filled layout is failed and anything else is still solving.
    #[must_use]
    pub fn resume(puzzle: Puzzle, record: &SavedRecord) -> Self {
        let status = if record.solved {
            Status::Passed
        } else if !record.lhs.contains(UNKNOWN) && !record.rhs.contains(UNKNOWN) {
            Status::Failed
        } else {
            Status::Solving
        };
        Self {
            puzzle,
            left_subs: record.lhs.clone(),
            right_subs: record.rhs.clone(),
            reserves: record.reserves.clone(),
            status,
            start_time: record.start_time,
            time_to_solve: record.time_to_solve.clone(),
        }
    }

    /// The persisted form of this board.
    #[must_use]
    pub fn to_record(&self, id: i32) -> SavedRecord {
        SavedRecord {
            id,
            solved: self.status == Status::Passed,
            time_to_solve: self.time_to_solve.clone(),
            start_time: self.start_time,
            lhs: self.left_subs.clone(),
            rhs: self.right_subs.clone(),
            reserves: self.reserves.clone(),
        }
    }

    /// Recompute status from the full layout. Never patched incrementally.
    #[must_use]
    pub fn derive_status(&self) -> Status {
        if self.left_subs.contains(UNKNOWN) || self.right_subs.contains(UNKNOWN) {
            return Status::Solving;
        }
        let lhs = evaluate(&substitute(&self.puzzle.lhs, &self.left_subs));
        let rhs = evaluate(&substitute(&self.puzzle.rhs, &self.right_subs));
        if lhs == rhs {
            Status::Passed
        } else {
            Status::Failed
        }
    }

    /// Move one token from `source` to `dest`.
    ///
    /// Slot extraction empties the slot; slot insertion evicts any occupant
    /// into the tray (unsorted append). Returns false, changing nothing
    /// observable, when the source slot is already empty — relocating the
    /// marker itself would break token conservation.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for its zone; callers address
    /// real positions of the current layout.
    pub(crate) fn relocate(&mut self, source: Location, dest: Location) -> bool {
        let token = match source.zone {
            Zone::Left => set_char(&mut self.left_subs, source.index, UNKNOWN),
            Zone::Right => set_char(&mut self.right_subs, source.index, UNKNOWN),
            Zone::Reserve => self.reserves.remove(source.index),
        };
        if token == UNKNOWN {
            return false;
        }

        match dest.zone {
            Zone::Left => {
                let evicted = set_char(&mut self.left_subs, dest.index, token);
                if evicted != UNKNOWN {
                    self.reserves.push(evicted);
                }
            }
            Zone::Right => {
                let evicted = set_char(&mut self.right_subs, dest.index, token);
                if evicted != UNKNOWN {
                    self.reserves.push(evicted);
                }
            }
            Zone::Reserve => self.reserves.push(token),
        }
        true
    }
}

/// Replace the character at `index`, returning the old one. Tokens are
/// single-byte ASCII, so byte positions stay on char boundaries.
fn set_char(slots: &mut String, index: usize, ch: char) -> char {
    let old = char::from(slots.as_bytes()[index]);
    slots.replace_range(index..=index, ch.encode_utf8(&mut [0; 4]));
    old
}
