//! Calendar math: puzzle seeds and game-day ids.
//!
//! The crate never reads the system clock or calendar itself; callers pass
//! today's date in. These functions only turn a date into the two numbers
//! the engine cares about.

use chrono::{Datelike, NaiveDate};

use super::tier::Difficulty;

/// First day the game shipped. Game ids count days elapsed since this date.
fn game_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 15).expect("valid epoch date")
}

/// Integer id of a game day, used to detect stale persisted records.
///
/// Day 0 is the epoch date itself; earlier dates are negative.
#[must_use]
pub fn game_id(date: NaiveDate) -> i32 {
    date.signed_duration_since(game_epoch()).num_days() as i32
}

/// Generation seed for one `(date, tier)` pair.
///
/// `1_000_000 * year + 100 * day_of_year + tier_index`. The day-of-year
/// factor of 100 leaves room for the tier index without collisions.
#[must_use]
pub fn puzzle_seed(date: NaiveDate, difficulty: Difficulty) -> u64 {
    1_000_000 * date.year() as u64 + 100 * u64::from(date.ordinal()) + u64::from(difficulty.index())
}
