//! Binary operator implementations.

use crate::{evaluator::ArithmeticError, grouper::Operator, syntax::Span};

/// Apply one operator to two operands.
///
/// Follows IEEE 754 semantics except that a zero divisor is an error.
/// `divisor` locates the right operand for that error.
pub(super) fn apply(
    op: Operator,
    left: f64,
    right: f64,
    divisor: &Span,
) -> Result<f64, ArithmeticError> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                Err(ArithmeticError::DivisionByZero {
                    span: divisor.clone(),
                })
            } else {
                Ok(left / right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(op: Operator, left: f64, right: f64) -> Result<f64, ArithmeticError> {
        apply(op, left, right, &Span::new(0, 1))
    }

    #[test]
    fn test_add() {
        assert_eq!(run(Operator::Add, 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(run(Operator::Add, 0.5, 0.25).unwrap(), 0.75);
    }

    #[test]
    fn test_sub() {
        assert_eq!(run(Operator::Sub, 10.0, 4.0).unwrap(), 6.0);
        assert_eq!(run(Operator::Sub, 3.0, 10.0).unwrap(), -7.0);
    }

    #[test]
    fn test_mul() {
        assert_eq!(run(Operator::Mul, 3.0, 4.0).unwrap(), 12.0);
        assert_eq!(run(Operator::Mul, 2.5, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_div() {
        assert_eq!(run(Operator::Div, 10.0, 4.0).unwrap(), 2.5);
        assert_eq!(run(Operator::Div, 0.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_div_by_zero() {
        let result = apply(Operator::Div, 1.0, 0.0, &Span::new(2, 3));
        assert_eq!(
            result,
            Err(ArithmeticError::DivisionByZero {
                span: Span::new(2, 3)
            })
        );
    }

    #[test]
    fn test_overflow_is_infinite() {
        assert_eq!(run(Operator::Mul, f64::MAX, 2.0).unwrap(), f64::INFINITY);
    }
}
