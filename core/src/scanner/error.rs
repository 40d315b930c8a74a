use crate::api::{Diagnostic, Severity};
use crate::syntax::Span;

/// A character that cannot start or continue any token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid character found: '{character}' at position {position}")]
pub struct LexError {
    /// Byte offset of the character in the line.
    pub position: usize,
    pub character: char,
}

impl LexError {
    pub fn span(&self) -> Span {
        Span::new(self.position, self.position + self.character.len_utf8())
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let help = if self.character.is_whitespace() {
            "Remove the whitespace, or enable whitespace skipping"
        } else {
            "Only digits, '.', '+', '-', '*', '/', '(' and ')' are allowed"
        };
        Diagnostic {
            severity: Severity::Error,
            message: format!("Invalid character '{}'", self.character.escape_debug()),
            span: self.span(),
            help: Some(help.to_string()),
            code: Some("L001".to_string()),
        }
    }
}
