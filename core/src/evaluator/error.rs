//! Evaluation errors.
//!
//! - **Arithmetic errors**: the operation itself is undefined (division by zero).
//! - **Malformed expressions**: a sibling list does not alternate
//!   operand, operator, operand.
//! - **Resource exceeded errors**: nesting deeper than the evaluator allows.

use core::fmt;

use crate::api::{Diagnostic, Severity};
use crate::syntax::Span;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Malformed(#[from] MalformedExpression),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceeded),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// `span` covers the divisor.
    #[error("Division by zero at {span}")]
    DivisionByZero { span: Span },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed expression: {kind} at {span}")]
pub struct MalformedExpression {
    pub kind: MalformedKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// `()`, or an empty line.
    EmptyGroup,
    /// An operator where an operand belongs: `*5`, `2++3`, `4-`.
    MissingOperand,
    /// Two operands side by side: `2(3)`.
    MissingOperator,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::EmptyGroup => write!(f, "empty group"),
            MalformedKind::MissingOperand => write!(f, "missing operand"),
            MalformedKind::MissingOperator => write!(f, "missing operator"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceExceeded {
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow {
        depth: usize,
        max_depth: usize,
        span: Span,
    },
}

impl MalformedExpression {
    pub fn new(kind: MalformedKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::Arithmetic(ArithmeticError::DivisionByZero { span })
            | EvalError::Malformed(MalformedExpression { span, .. })
            | EvalError::ResourceExceeded(ResourceExceeded::StackOverflow { span, .. }) => {
                span.clone()
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match self {
            EvalError::Arithmetic(ArithmeticError::DivisionByZero { .. }) => (
                "Division by zero".to_string(),
                "E001",
                Some("The divisor evaluates to zero"),
            ),
            EvalError::Malformed(MalformedExpression { kind, .. }) => {
                let help = match kind {
                    MalformedKind::EmptyGroup => "Put an expression here",
                    MalformedKind::MissingOperand => "Add a number or '(' ... ')' here",
                    MalformedKind::MissingOperator => "Add an operator between the operands",
                };
                (format!("Malformed expression: {}", kind), "E002", Some(help))
            }
            EvalError::ResourceExceeded(ResourceExceeded::StackOverflow { max_depth, .. }) => (
                format!("Expression nesting exceeds maximum of {} levels", max_depth),
                "E003",
                None,
            ),
        };
        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span(),
            help: help.map(str::to_string),
            code: Some(code.to_string()),
        }
    }
}
