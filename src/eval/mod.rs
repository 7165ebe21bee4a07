//! Infix expression evaluation.
//!
//! The evaluator accepts exactly the language the generator emits: decimal
//! digits and the operators `+ - *`, no parentheses, no whitespace. `*`
//! binds tighter than `+`/`-`; equal-precedence operators associate left.
//!
//! The input contract is the generator's correctness, established by its
//! test suite, so there is no error channel here: malformed input panics.

use smallvec::SmallVec;

/// One element of the postfix queue.
enum Term {
    Operand(i64),
    Operator(char),
}

/// Operator binding strength: `*` above `+`/`-`.
fn precedence(op: char) -> u8 {
    match op {
        '*' => 1,
        _ => 0,
    }
}

fn apply(lhs: i64, rhs: i64, op: char) -> i64 {
    match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        _ => panic!("unsupported operator {op:?}"),
    }
}

/// Evaluate a digit/operator infix expression.
///
/// A bare operand run such as `"43"` evaluates to itself.
///
/// ```
/// assert_eq!(digitle::evaluate("2+3*4"), 14);
/// ```
///
/// # Panics
///
/// Panics on malformed input (empty operand run, dangling operator,
/// characters outside digits and `+ - *`).
#[must_use]
pub fn evaluate(expression: &str) -> i64 {
    // Shunting-yard: digits accumulate into operands, operators drain the
    // stack while its top binds at least as tightly (left associativity).
    let mut postfix: SmallVec<[Term; 8]> = SmallVec::new();
    let mut ops: SmallVec<[char; 4]> = SmallVec::new();
    let mut operand: i64 = 0;
    let mut has_digit = false;

    for ch in expression.chars() {
        if let Some(digit) = ch.to_digit(10) {
            has_digit = true;
            operand = 10 * operand + i64::from(digit);
        } else {
            if has_digit {
                postfix.push(Term::Operand(operand));
            }
            operand = 0;
            has_digit = false;
            while let Some(&top) = ops.last() {
                if precedence(ch) > precedence(top) {
                    break;
                }
                postfix.push(Term::Operator(top));
                ops.pop();
            }
            ops.push(ch);
        }
    }
    if has_digit {
        postfix.push(Term::Operand(operand));
    }
    while let Some(op) = ops.pop() {
        postfix.push(Term::Operator(op));
    }

    let mut values: SmallVec<[i64; 8]> = SmallVec::new();
    for term in postfix {
        match term {
            Term::Operand(value) => values.push(value),
            Term::Operator(op) => {
                let rhs = values.pop().expect("operator needs a right operand");
                let lhs = values.pop().expect("operator needs a left operand");
                values.push(apply(lhs, rhs, op));
            }
        }
    }
    values.pop().expect("expression yields a value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_digit_operands() {
        assert_eq!(evaluate("12+3"), 15);
        assert_eq!(evaluate("12-3"), 9);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2*3+4"), 10);
        assert_eq!(evaluate("2+3*4"), 14);
        assert_eq!(evaluate("100-10*5"), 50);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10-3-4"), 3);
        assert_eq!(evaluate("9-5+2"), 6);
    }

    #[test]
    fn test_bare_operand() {
        assert_eq!(evaluate("43"), 43);
        assert_eq!(evaluate("0"), 0);
        assert_eq!(evaluate("7"), 7);
    }

    #[test]
    fn test_leading_zero_operand() {
        // A filled result slot can produce one; it reads as plain decimal.
        assert_eq!(evaluate("05"), 5);
    }

    #[test]
    fn test_negative_intermediate() {
        assert_eq!(evaluate("1-9"), -8);
        assert_eq!(evaluate("1-2*9"), -17);
    }
}
