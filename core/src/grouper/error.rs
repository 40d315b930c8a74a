use crate::api::{Diagnostic, Severity};
use crate::syntax::Span;

/// Parenthesis mismatch, or nesting beyond the configured limit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("Unmatched ')' at {span}")]
    UnmatchedRightParen { span: Span },

    /// `span` is the outermost `(` still open at end of input.
    #[error("{count} unclosed '(' at end of input")]
    Unclosed { count: usize, span: Span },

    #[error("Parenthesis nesting depth {depth} exceeds maximum of {max_depth}")]
    MaxDepthExceeded {
        depth: usize,
        max_depth: usize,
        span: Span,
    },
}

impl StructuralError {
    pub fn span(&self) -> Span {
        match self {
            StructuralError::UnmatchedRightParen { span }
            | StructuralError::Unclosed { span, .. }
            | StructuralError::MaxDepthExceeded { span, .. } => span.clone(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match self {
            StructuralError::UnmatchedRightParen { .. } => (
                "Unmatched closing parenthesis ')'".to_string(),
                "S001",
                "Remove it, or add the missing '('",
            ),
            StructuralError::Unclosed { count, .. } => (
                format!("{} unclosed parenthesis '(' at end of input", count),
                "S002",
                "Add the missing closing parenthesis",
            ),
            StructuralError::MaxDepthExceeded { max_depth, .. } => (
                format!(
                    "Parenthesis nesting exceeds maximum of {} levels",
                    max_depth
                ),
                "S003",
                "Reduce nesting or simplify the expression",
            ),
        };
        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span(),
            help: Some(help.to_string()),
            code: Some(code.to_string()),
        }
    }
}
