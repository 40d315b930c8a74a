//! Trusted reference evaluator used by the self-test harness.
//!
//! Expressions are handed to CEL (Common Expression Language). CEL divides
//! integers with truncation and rejects mixed int/double arithmetic, so every
//! numeric literal is rewritten as a double first.

use cel_interpreter::{Context, Program, Value};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceError {
    #[error("reference compile error: {0}")]
    Compile(String),
    #[error("reference execution error: {0}")]
    Execute(String),
    #[error("reference result is not a number: {0}")]
    NotANumber(String),
}

/// Rewrite numeric literals so CEL treats them as doubles: `10` becomes
/// `10.0` and `5.` becomes `5.0`.
pub fn to_double_literals(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 8);
    let mut literal = String::new();
    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            continue;
        }
        flush_literal(&mut literal, &mut out);
        out.push(c);
    }
    flush_literal(&mut literal, &mut out);
    out
}

fn flush_literal(literal: &mut String, out: &mut String) {
    if literal.is_empty() {
        return;
    }
    out.push_str(literal);
    if !literal.contains('.') {
        out.push_str(".0");
    } else if literal.ends_with('.') {
        out.push('0');
    }
    literal.clear();
}

/// Evaluate `expr` with CEL.
pub fn evaluate(expr: &str) -> Result<f64, ReferenceError> {
    let source = to_double_literals(expr);
    let program =
        Program::compile(&source).map_err(|e| ReferenceError::Compile(format!("{:?}", e)))?;
    let context = Context::default();
    let value = program
        .execute(&context)
        .map_err(|e| ReferenceError::Execute(format!("{:?}", e)))?;
    match value {
        Value::Float(f) => Ok(f),
        Value::Int(i) => Ok(i as f64),
        Value::UInt(u) => Ok(u as f64),
        other => Err(ReferenceError::NotANumber(format!("{:?}", other))),
    }
}
