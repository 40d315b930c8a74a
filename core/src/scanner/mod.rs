//! Lexical scanning: one input line to an ordered sequence of tokens.
//!
//! A number is a digit run optionally followed by `.` and a fractional digit
//! run. The fractional run may be empty, so `5.` scans as `5`. Only a digit
//! starts a number; a leading `.` is an invalid character.
//!
//! Whitespace is rejected unless [`ScanOptions::allow_whitespace`] is set.

mod error;


pub use error::LexError;

use core::fmt;

use logos::{Lexer, Logos};
use tracing::{debug, trace};

use crate::syntax::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Token {
    #[regex(r"[0-9]+(\.[0-9]*)?", read_number)]
    Number(f64),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,
}

/// Accumulates the matched digits: `v * 10 + d` for the integer part, then
/// a weight starting at 0.1 and divided by ten for each fractional digit.
fn read_number(lex: &mut Lexer<Token>) -> f64 {
    let mut digits = lex.slice().bytes();
    let mut value = 0.0;
    for byte in digits.by_ref() {
        if byte == b'.' {
            break;
        }
        value = value * 10.0 + f64::from(byte - b'0');
    }
    let mut weight = 0.1;
    for byte in digits {
        value += f64::from(byte - b'0') * weight;
        weight /= 10.0;
    }
    value
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// A token together with the bytes of the line it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip spaces and tabs between tokens instead of rejecting them.
    pub allow_whitespace: bool,
}

/// Scan a line with the default (strict) options.
pub fn scan(line: &str) -> Result<Vec<SpannedToken>, LexError> {
    scan_with_options(line, ScanOptions::default())
}

pub fn scan_with_options(line: &str, options: ScanOptions) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokens = Vec::new();

    for (result, range) in Token::lexer(line).spanned() {
        let span = Span::from(range);
        match result {
            Ok(token) => {
                trace!(%token, %span, "scanned token");
                tokens.push(SpannedToken { token, span });
            }
            Err(()) => {
                let character = line
                    .get(span.start()..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                if options.allow_whitespace && matches!(character, ' ' | '\t') {
                    continue;
                }
                debug!(position = span.start(), %character, "invalid character");
                return Err(LexError {
                    position: span.start(),
                    character,
                });
            }
        }
    }

    debug!(count = tokens.len(), "scanned line");
    Ok(tokens)
}
