//! # digitle
//!
//! A deterministic daily arithmetic puzzle engine.
//!
//! Each calendar day and difficulty tier maps to exactly one puzzle: an
//! equation whose digits are hidden behind placeholder slots, plus a tray of
//! digit tokens holding one more token than the solution needs. A session
//! relocates tokens between slots and tray until both sides evaluate equal.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: generation is a pure function of `(date, tier)`.
//!    The bit generator (ChaCha8) is pinned so puzzles never drift across
//!    versions or platforms.
//!
//! 2. **Conservation**: a board's token multiset is fixed at creation.
//!    Every relocation moves exactly one token, evicting a displaced token
//!    into the tray when the destination slot is occupied.
//!
//! 3. **Self-healing persistence**: saved progress that no longer matches
//!    today's puzzle is discarded whole, never partially recovered. Storage
//!    failures degrade to a fresh board, not an error.
//!
//! ## Modules
//!
//! - `core`: difficulty tiers, board locations, seeded RNG, calendar math
//! - `eval`: infix expression evaluator (`+ - *`, no parentheses)
//! - `puzzle`: puzzle data model and the seeded generator
//! - `progress`: persisted records, stores, resumability validation
//! - `session`: the command surface owning the live board

pub mod core;
pub mod eval;
pub mod puzzle;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    game_id, puzzle_seed, Difficulty, Location, PuzzleRng, Zone, ALL_DIFFICULTIES,
};

pub use crate::eval::evaluate;

pub use crate::puzzle::{
    count_unknowns, empty_substitutions, generate, substitute, Puzzle, UNKNOWN,
};

pub use crate::progress::{
    is_resumable, FileStore, MemoryStore, ProgressStore, SavedRecord, StoreError,
};

pub use crate::session::{Board, Clock, GameSession, Status, SystemClock};
