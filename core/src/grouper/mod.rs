//! Structural grouping: tokens to a tree that reflects parentheses only.
//!
//! Each [`Group`] is one level of nesting. Its children are the numbers,
//! operators and nested groups of that level, kept as flat siblings in source
//! order. Operator precedence is resolved later by the evaluator.
//!
//! ```text
//! 2*(3+1)  =>  [2, *, [3, +, 1]]
//! ```
//!
//! Parenthesis mismatches are rejected rather than recovered from.

mod display;
mod error;

#[cfg(test)]
mod group_test;

pub use error::StructuralError;

use core::mem;

use tracing::{debug, trace};

use crate::{
    scanner::{SpannedToken, Token},
    syntax::Span,
};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Ceiling for any configured nesting limit. Evaluation recurses once per
/// nested group, so larger limits are clamped to this.
pub const MAX_DEPTH_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Scalar(f64),
    /// A sibling marker between two operands, not a binary node.
    Operator(Operator),
    Group(Group),
}

impl Node {
    pub fn scalar(value: f64, span: Span) -> Self {
        Self {
            kind: NodeKind::Scalar(value),
            span,
        }
    }

    pub fn operator(op: Operator, span: Span) -> Self {
        Self {
            kind: NodeKind::Operator(op),
            span,
        }
    }

    pub fn group(group: Group) -> Self {
        Self {
            span: group.span.clone(),
            kind: NodeKind::Group(group),
        }
    }

    /// Scalars and groups are operands; operators are not.
    pub fn is_operand(&self) -> bool {
        !matches!(self.kind, NodeKind::Operator(_))
    }
}

/// One parenthesized sub-expression, or the whole line at the top level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub children: Vec<Node>,
    pub span: Span,
}

impl Group {
    pub fn new(children: Vec<Node>, span: Span) -> Self {
        Self { children, span }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Siblings of an enclosing level, saved while a nested group is open.
struct Frame {
    siblings: Vec<Node>,
    open: Span,
}

/// Group tokens with the default nesting limit.
pub fn group(tokens: &[SpannedToken]) -> Result<Group, StructuralError> {
    group_with_max_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// `max_depth` above [`MAX_DEPTH_LIMIT`] is clamped to it.
pub fn group_with_max_depth(
    tokens: &[SpannedToken],
    max_depth: usize,
) -> Result<Group, StructuralError> {
    let max_depth = max_depth.min(MAX_DEPTH_LIMIT);
    let whole = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Span::combine(&first.span, &last.span),
        _ => Span::default(),
    };

    let mut stack: Vec<Frame> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for SpannedToken { token, span } in tokens {
        match *token {
            Token::Number(value) => current.push(Node::scalar(value, span.clone())),
            Token::LeftParen => {
                if stack.len() >= max_depth {
                    return Err(StructuralError::MaxDepthExceeded {
                        depth: stack.len() + 1,
                        max_depth,
                        span: span.clone(),
                    });
                }
                trace!(depth = stack.len() + 1, "open group");
                stack.push(Frame {
                    siblings: mem::take(&mut current),
                    open: span.clone(),
                });
            }
            Token::RightParen => {
                let Some(frame) = stack.pop() else {
                    return Err(StructuralError::UnmatchedRightParen { span: span.clone() });
                };
                let children = mem::replace(&mut current, frame.siblings);
                trace!(depth = stack.len() + 1, len = children.len(), "close group");
                current.push(Node::group(Group::new(
                    children,
                    Span::combine(&frame.open, span),
                )));
            }
            Token::Plus => current.push(Node::operator(Operator::Add, span.clone())),
            Token::Minus => current.push(Node::operator(Operator::Sub, span.clone())),
            Token::Star => current.push(Node::operator(Operator::Mul, span.clone())),
            Token::Slash => current.push(Node::operator(Operator::Div, span.clone())),
        }
    }

    if let Some(outermost) = stack.first() {
        return Err(StructuralError::Unclosed {
            count: stack.len(),
            span: outermost.open.clone(),
        });
    }

    debug!(len = current.len(), "grouped line");
    Ok(Group::new(current, whole))
}
