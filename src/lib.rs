//! Tally - a small arithmetic calculator
//!
//! # Overview
//!
//! Tally evaluates single-line arithmetic over non-negative decimals with
//! `+ - * /` and parentheses. A line goes through three stages:
//!
//! - **scan**: characters to tokens
//! - **group**: tokens to a tree nested by parentheses only
//! - **evaluate**: leftmost `*`/`/` first, then leftmost `+`/`-`, level by level
//!
//! # Quick Start
//!
//! ```
//! use tally::{compute, render_error_to_string_no_color};
//!
//! assert_eq!(compute("3+4*2/(1-5)").unwrap(), 1.0);
//!
//! let source = "1/0";
//! let err = compute(source).unwrap_err();
//! let rendered = render_error_to_string_no_color(&err, source);
//! assert!(rendered.contains("Division by zero"));
//! ```
//!
//! Errors are per line: a failed line leaves nothing behind, so a host loop
//! can report it and carry on with the next.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from tally_core
pub use tally_core::api::{Diagnostic, Error, Options, Severity, compute, compute_with_options};

// Re-export the pipeline stages
pub use tally_core::evaluator::{self, EvalError, evaluate};
pub use tally_core::grouper::{self, Group, StructuralError, group};
pub use tally_core::scanner::{self, LexError, ScanOptions, Token, scan};
pub use tally_core::syntax::Span;
