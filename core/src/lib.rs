//! Core pipeline for the tally calculator.
//!
//! A line of arithmetic is processed in three feed-forward stages:
//!
//! 1. [`scanner`] turns characters into [`scanner::Token`]s.
//! 2. [`grouper`] nests the tokens by parentheses only, leaving numbers and
//!    operators as flat siblings inside each [`grouper::Group`].
//! 3. [`evaluator`] resolves precedence by repeatedly collapsing the leftmost
//!    multiplicative operation, then the leftmost additive one.
//!
//! [`api::compute`] composes the three stages.
//!
//! ```
//! let value = tally_core::api::compute("3+4*2/(1-5)").unwrap();
//! assert_eq!(value, 1.0);
//! ```

pub mod api;
pub mod evaluator;
pub mod grouper;
pub mod scanner;
pub mod syntax;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
