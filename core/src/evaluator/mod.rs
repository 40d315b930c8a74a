//! Precedence-resolving evaluator for grouped expression trees.
//!
//! Each [`Group`] is reduced by repeatedly collapsing a window
//! `[left, op, right]` into a single scalar:
//!
//! - the leftmost `*` or `/` is collapsed first, while any remain;
//! - then the leftmost `+` or `-`.
//!
//! Nested groups are opaque operands until a collapse needs their value, at
//! which point they are evaluated recursively. Every collapse shortens the
//! sibling list by two, so reduction always terminates.
//!
//! ## Example
//!
//! ```
//! use tally_core::{evaluator, grouper, scanner};
//!
//! let tokens = scanner::scan("10/2-3").unwrap();
//! let tree = grouper::group(&tokens).unwrap();
//! assert_eq!(evaluator::evaluate(tree).unwrap(), 2.0);
//! ```

mod error;
mod eval;
mod operators;


pub use error::{ArithmeticError, EvalError, MalformedExpression, MalformedKind, ResourceExceeded};
pub use eval::Evaluator;

use crate::grouper::{DEFAULT_MAX_DEPTH, Group};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum number of nested groups entered below the top level.
    /// Clamped to [`crate::grouper::MAX_DEPTH_LIMIT`].
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate a grouped expression with default limits.
pub fn evaluate(tree: Group) -> Result<f64, EvalError> {
    evaluate_with_options(tree, EvaluatorOptions::default())
}

pub fn evaluate_with_options(tree: Group, options: EvaluatorOptions) -> Result<f64, EvalError> {
    Evaluator::new(options).eval(tree)
}
