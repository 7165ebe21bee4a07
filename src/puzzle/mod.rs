//! Puzzle data model: masked equation templates plus a reserve tray.

use serde::{Deserialize, Serialize};

pub mod generator;

pub use generator::generate;

/// Marker for an unfilled substitution slot in templates and boards.
pub const UNKNOWN: char = '?';

/// One day's puzzle for one tier.
///
/// `lhs` and `rhs` are templates over digits, `+ - *`, and [`UNKNOWN`];
/// `reserves` is the tray of digit tokens, sorted ascending at generation
/// time. Filling every slot from the tray (one decoy token remains) can
/// always reproduce an equation whose sides evaluate equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub lhs: String,
    pub rhs: String,
    pub reserves: String,
}

impl Puzzle {
    /// Number of substitution slots on the left-hand side.
    #[must_use]
    pub fn lhs_slots(&self) -> usize {
        count_unknowns(&self.lhs)
    }

    /// Number of substitution slots on the right-hand side.
    #[must_use]
    pub fn rhs_slots(&self) -> usize {
        count_unknowns(&self.rhs)
    }
}

/// Count the unfilled-slot markers in a template or substitution string.
#[must_use]
pub fn count_unknowns(s: &str) -> usize {
    s.chars().filter(|&ch| ch == UNKNOWN).count()
}

/// Fill a template's slots, in order, from a substitution string.
///
/// Substitution characters may themselves be [`UNKNOWN`] (slot still empty).
///
/// # Panics
///
/// Panics if `substitutions` has fewer characters than the template has
/// slots; boards maintain that equality as an invariant.
#[must_use]
pub fn substitute(template: &str, substitutions: &str) -> String {
    let mut subs = substitutions.chars();
    template
        .chars()
        .map(|ch| {
            if ch == UNKNOWN {
                subs.next().expect("one substitution per slot")
            } else {
                ch
            }
        })
        .collect()
}

/// The all-empty substitution string for a template.
#[must_use]
pub fn empty_substitutions(template: &str) -> String {
    UNKNOWN.to_string().repeat(count_unknowns(template))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_unknowns() {
        assert_eq!(count_unknowns("?+??"), 3);
        assert_eq!(count_unknowns("43"), 0);
        assert_eq!(count_unknowns(""), 0);
    }

    #[test]
    fn test_substitute_fills_in_order() {
        assert_eq!(substitute("?+??", "835"), "8+35");
        assert_eq!(substitute("?+??", "8?5"), "8+?5");
        assert_eq!(substitute("43", ""), "43");
    }

    #[test]
    fn test_empty_substitutions() {
        assert_eq!(empty_substitutions("?+??"), "???");
        assert_eq!(empty_substitutions("43"), "");
    }

    #[test]
    fn test_slot_counts() {
        let puzzle = Puzzle {
            lhs: "?+??".to_string(),
            rhs: "4?".to_string(),
            reserves: "13358".to_string(),
        };
        assert_eq!(puzzle.lhs_slots(), 3);
        assert_eq!(puzzle.rhs_slots(), 1);
    }
}
