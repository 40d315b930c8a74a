//! Public entry points: compute a line end to end.

mod error;
mod options;


pub use error::{Diagnostic, Error, Severity};
pub use options::Options;

use tracing::debug;

use crate::{
    evaluator::{self, EvaluatorOptions},
    grouper, scanner,
};

/// Scan, group and evaluate one line with default options.
///
/// ```
/// use tally_core::api::{Error, compute};
///
/// assert_eq!(compute("2*(3+1)").unwrap(), 8.0);
/// assert!(matches!(compute("2&3"), Err(Error::Lex(_))));
/// ```
pub fn compute(text: &str) -> Result<f64, Error> {
    compute_with_options(text, &Options::default())
}

pub fn compute_with_options(text: &str, options: &Options) -> Result<f64, Error> {
    let tokens = scanner::scan_with_options(text, options.scan)?;
    let tree = grouper::group_with_max_depth(&tokens, options.max_depth)?;
    let value = evaluator::evaluate_with_options(
        tree,
        EvaluatorOptions {
            max_depth: options.max_depth,
        },
    )?;
    debug!(text, value, "computed line");
    Ok(value)
}
