//! The persisted form of a board snapshot.

use serde::{Deserialize, Serialize};

/// One tier's saved progress.
///
/// `lhs`/`rhs` hold the substitution strings (one character per slot, digit
/// or the placeholder marker), not the templates; the templates regenerate
/// from the date. `Default` is the zero record a store returns when nothing
/// usable is persisted — its `id` of 0 only matches the epoch game day, and
/// its empty substitutions fail validation against any real puzzle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: i32,
    pub solved: bool,
    pub time_to_solve: String,
    /// Epoch millis when the board was first created.
    pub start_time: i64,
    pub lhs: String,
    pub rhs: String,
    pub reserves: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_record() {
        let record = SavedRecord::default();
        assert_eq!(record.id, 0);
        assert!(!record.solved);
        assert_eq!(record.start_time, 0);
        assert!(record.lhs.is_empty() && record.rhs.is_empty() && record.reserves.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let record = SavedRecord {
            id: 16,
            solved: true,
            time_to_solve: "1m 5s".to_string(),
            start_time: 1_764_500_000_000,
            lhs: "835".to_string(),
            rhs: String::new(),
            reserves: "1".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SavedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
