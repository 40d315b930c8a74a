//! Canned expressions computed by tally and cross-checked against the
//! reference evaluator.

use nu_ansi_term::Color;
use tally::{Options, compute_with_options};
use tracing::debug;

use crate::reference;

/// Absolute tolerance between tally and the reference.
pub const TOLERANCE: f64 = 1e-8;

pub const CASES: &[&str] = &[
    "1+2",
    "1.0+2.1-3",
    "2*3",
    "4/2",
    "2+3*4",
    "10/2-3",
    "10/2*3",
    "2*3+1",
    "2*(3+1)",
    "4/(2+2)",
    "4/(2.0+2.0)",
    "3.5*2-1.2/0.6",
    "10-3+5",
    "10-(3+5)",
    "(2+3)*4",
    "2*(3+4*(2-1))",
    "10/3",
    "3+4*2/(1-5)",
    "(3.5+2.5)/(2.0-1.0)",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass { expected: f64 },
    Fail { expected: f64, actual: f64 },
    Error(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

pub fn check(line: &str, options: &Options) -> Outcome {
    let expected = match reference::evaluate(line) {
        Ok(value) => value,
        Err(e) => return Outcome::Error(e.to_string()),
    };
    match compute_with_options(line, options) {
        Ok(actual) if (actual - expected).abs() < TOLERANCE => Outcome::Pass { expected },
        Ok(actual) => Outcome::Fail { expected, actual },
        Err(e) => Outcome::Error(e.to_string()),
    }
}

pub fn describe(line: &str, outcome: &Outcome, use_color: bool) -> String {
    let (label, color, detail) = match outcome {
        Outcome::Pass { expected } => ("PASS!", Color::Green, format!("({} = {:.6})", line, expected)),
        Outcome::Fail { expected, actual } => (
            "FAIL!",
            Color::Red,
            format!("({} should be {:.6} but was {:.6})", line, expected, actual),
        ),
        Outcome::Error(message) => ("FAIL!", Color::Red, format!("({} failed: {})", line, message)),
    };
    if use_color {
        format!("{} {}", color.bold().paint(label), detail)
    } else {
        format!("{} {}", label, detail)
    }
}

pub fn run(options: &Options, use_color: bool) -> Summary {
    println!("==== Test started! ====");
    let mut summary = Summary::default();
    for line in CASES {
        let outcome = check(line, options);
        debug!(line, ?outcome, "self-test case");
        println!("{}", describe(line, &outcome, use_color));
        match outcome {
            Outcome::Pass { .. } => summary.passed += 1,
            Outcome::Fail { .. } | Outcome::Error(_) => summary.failed += 1,
        }
    }
    println!("==== Test finished! ====\n");
    summary
}
