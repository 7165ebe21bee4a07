//! Core engine types: difficulty tiers, board locations, RNG, calendar math.
//!
//! Everything in this module is puzzle-agnostic plumbing. The generator and
//! session layers build on these without adding state of their own here.

pub mod calendar;
pub mod location;
pub mod rng;
pub mod tier;

pub use calendar::{game_id, puzzle_seed};
pub use location::{Location, Zone};
pub use rng::PuzzleRng;
pub use tier::{Difficulty, ALL_DIFFICULTIES};
