//! Configuration options for computing a line.

use crate::{grouper::DEFAULT_MAX_DEPTH, scanner::ScanOptions};

/// Options shared by all three stages.
///
/// # Example
///
/// ```
/// use tally_core::{api::Options, scanner::ScanOptions};
///
/// let options = Options {
///     scan: ScanOptions { allow_whitespace: true },
///     max_depth: 64,
/// };
/// assert_eq!(tally_core::api::compute_with_options("1 + 2", &options).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub scan: ScanOptions,

    /// Maximum parenthesis nesting, enforced when grouping and evaluating.
    /// Values above [`crate::grouper::MAX_DEPTH_LIMIT`] are clamped to it.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
