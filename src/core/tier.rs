//! Difficulty tiers and tier progression.

use serde::{Deserialize, Serialize};

/// Puzzle difficulty tier.
///
/// Tiers differ in operand count, operator selection, and how much of the
/// equation is masked. They also form a linear progression: solving one tier
/// unlocks the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// All tiers in progression order.
pub const ALL_DIFFICULTIES: [Difficulty; 3] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
];

impl Difficulty {
    /// Tier index used in seed derivation: Easy=0, Medium=1, Hard=2.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// The next tier up, or `None` at the top.
    #[must_use]
    pub fn successor(self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => Some(Difficulty::Medium),
            Difficulty::Medium => Some(Difficulty::Hard),
            Difficulty::Hard => None,
        }
    }

    /// Tiers available to the player after solving this tier.
    #[must_use]
    pub fn unlocked_after_solve(self) -> &'static [Difficulty] {
        match self {
            Difficulty::Easy => &[Difficulty::Easy, Difficulty::Medium],
            Difficulty::Medium | Difficulty::Hard => &ALL_DIFFICULTIES,
        }
    }

    /// Stable key for per-tier persisted records.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_indices() {
        assert_eq!(Difficulty::Easy.index(), 0);
        assert_eq!(Difficulty::Medium.index(), 1);
        assert_eq!(Difficulty::Hard.index(), 2);
    }

    #[test]
    fn test_successor_chain() {
        assert_eq!(Difficulty::Easy.successor(), Some(Difficulty::Medium));
        assert_eq!(Difficulty::Medium.successor(), Some(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.successor(), None);
    }

    #[test]
    fn test_unlocks() {
        assert_eq!(
            Difficulty::Easy.unlocked_after_solve(),
            &[Difficulty::Easy, Difficulty::Medium]
        );
        assert_eq!(Difficulty::Medium.unlocked_after_solve(), &ALL_DIFFICULTIES);
        assert_eq!(Difficulty::Hard.unlocked_after_solve(), &ALL_DIFFICULTIES);
    }

    #[test]
    fn test_storage_keys_distinct() {
        assert_eq!(Difficulty::Easy.storage_key(), "easy");
        assert_eq!(Difficulty::Medium.storage_key(), "medium");
        assert_eq!(Difficulty::Hard.storage_key(), "hard");
    }
}
