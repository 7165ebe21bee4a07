//! Seeded puzzle generation.
//!
//! `generate` is a pure function of `(date, tier)`: the seed comes from the
//! calendar, the bit generator is pinned, and the draw order is fixed
//! (operand digits, operator positions, operators, the Hard-tier mask index,
//! then the decoy digit). Changing any of these would silently re-deal every
//! published puzzle, so the whole pipeline is regression-tested against
//! recorded fixtures.
//!
//! ```
//! use chrono::NaiveDate;
//! use digitle::{generate, Difficulty};
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! assert_eq!(generate(day, Difficulty::Hard), generate(day, Difficulty::Hard));
//! ```

use chrono::NaiveDate;

use crate::core::{puzzle_seed, Difficulty, PuzzleRng};
use crate::eval::evaluate;

use super::{Puzzle, UNKNOWN};

/// Generate the puzzle for one `(date, tier)` pair.
#[must_use]
pub fn generate(date: NaiveDate, difficulty: Difficulty) -> Puzzle {
    let mut rng = PuzzleRng::new(puzzle_seed(date, difficulty));
    let equation = draft_equation(&mut rng, difficulty);
    let result = evaluate(&equation);

    match difficulty {
        Difficulty::Easy | Difficulty::Medium => Puzzle {
            lhs: mask_digits(&equation),
            rhs: result.to_string(),
            reserves: reserve_tray(&mut rng, &equation, None),
        },
        Difficulty::Hard => {
            let digits = result.to_string();
            let mut idx = rng.gen_range(0..digits.len() as u32) as usize;
            if result > 0 {
                // never mask a '0' of a positive result
                while digits.as_bytes()[idx] == b'0' {
                    idx = (idx + 1) % digits.len();
                }
            }
            let hidden = char::from(digits.as_bytes()[idx]);
            let mut rhs = digits;
            rhs.replace_range(idx..=idx, &UNKNOWN.to_string());
            Puzzle {
                lhs: mask_digits(&equation),
                rhs,
                reserves: reserve_tray(&mut rng, &equation, Some(hidden)),
            }
        }
    }
}

/// Draw and assemble the fully-revealed equation for a tier.
///
/// Easy draws 4 digits and one of `+ -` at position 1 or 2; Medium and Hard
/// draw 6 digits and an ordered operator pair at one of the position pairs
/// (1,3), (2,4), (1,4). Each operator overwrites the drawn digit at its
/// position. Results below the tier's floor get every `-` rewritten to `+`.
fn draft_equation(rng: &mut PuzzleRng, difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => {
            let digits = random_digits(rng, 4);
            let positions: &[usize] = if rng.gen_range(0..2) == 0 { &[1] } else { &[2] };
            let ops = if rng.gen_bool() { "+" } else { "-" };
            lift_negative(weave_operators(&digits, positions, ops), 1)
        }
        Difficulty::Medium => {
            let digits = random_digits(rng, 6);
            let positions = operator_positions(rng);
            let ops = two_operators(rng);
            lift_negative(weave_operators(&digits, positions, ops), 1)
        }
        Difficulty::Hard => {
            let digits = random_digits(rng, 6);
            let positions = operator_positions(rng);
            let ops = two_operators_one_multiply(rng);
            // zero is an allowed Hard result
            lift_negative(weave_operators(&digits, positions, ops), 0)
        }
    }
}

fn random_digits(rng: &mut PuzzleRng, count: usize) -> String {
    (0..count).map(|_| rng.next_digit()).collect()
}

fn operator_positions(rng: &mut PuzzleRng) -> &'static [usize] {
    match rng.gen_range(0..3) {
        0 => &[1, 3],
        1 => &[2, 4],
        _ => &[1, 4],
    }
}

/// Ordered operator pairs over `{+ - *}` without same-operator repeats.
fn two_operators(rng: &mut PuzzleRng) -> &'static str {
    match rng.gen_range(0..6) {
        0 => "+-",
        1 => "+*",
        2 => "-+",
        3 => "-*",
        4 => "*+",
        _ => "*-",
    }
}

/// Ordered operator pairs containing exactly one `*`.
fn two_operators_one_multiply(rng: &mut PuzzleRng) -> &'static str {
    match rng.gen_range(0..4) {
        0 => "+*",
        1 => "-*",
        2 => "*+",
        _ => "*-",
    }
}

/// Overwrite the digit at each marked position with the next operator.
fn weave_operators(digits: &str, positions: &[usize], ops: &str) -> String {
    let mut ops_iter = ops.chars();
    digits
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            if positions.contains(&idx) {
                ops_iter.next().expect("an operator per marked position")
            } else {
                ch
            }
        })
        .collect()
}

/// Rewrite every `-` to `+` when the equation's value falls below `floor`.
fn lift_negative(equation: String, floor: i64) -> String {
    if evaluate(&equation) < floor {
        equation.replace('-', "+")
    } else {
        equation
    }
}

fn mask_digits(equation: &str) -> String {
    equation
        .chars()
        .map(|ch| if ch.is_ascii_digit() { UNKNOWN } else { ch })
        .collect()
}

/// Collect the revealed equation's digits, the Hard tier's displaced result
/// digit if any, and one decoy draw, then sort ascending. The sort happens
/// here and never again; in-play insertions append unsorted.
fn reserve_tray(rng: &mut PuzzleRng, equation: &str, carried: Option<char>) -> String {
    let mut tokens: Vec<char> = equation.chars().filter(char::is_ascii_digit).collect();
    if let Some(digit) = carried {
        tokens.push(digit);
    }
    tokens.push(rng.next_digit());
    tokens.sort_unstable();
    tokens.into_iter().collect()
}
