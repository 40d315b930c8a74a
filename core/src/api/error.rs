//! Public error types.
//!
//! Each stage has its own error type. [`Error`] wraps whichever stage failed
//! so `?` composes the pipeline, and converts to a [`Diagnostic`] for
//! rendering.

use core::fmt;

use crate::{
    evaluator::EvalError, grouper::StructuralError, scanner::LexError, syntax::Span,
};

/// Failure to compute one line. Never fatal beyond that line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::Lex(e) => e.span(),
            Error::Structural(e) => e.span(),
            Error::Eval(e) => e.span(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(e) => e.to_diagnostic(),
            Error::Structural(e) => e.to_diagnostic(),
            Error::Eval(e) => e.to_diagnostic(),
        }
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "E001").
    pub code: Option<String>,
}

/// Every diagnostic tally produces is an error; a failed line has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}
