mod highlighter;
mod reference;
mod repl;
mod selftest;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::Signal;
use std::io::BufRead;
use std::io::BufReader;
use tally::{
    Options, ScanOptions, compute_with_options, grouper, render_error,
    render_error_to_string_no_color, scanner,
};

/// Tally - evaluate single-line arithmetic
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Cross-check canned expressions against the reference evaluator, then exit
    #[arg(long)]
    self_test: bool,

    /// Skip spaces and tabs between tokens instead of rejecting them
    #[arg(long)]
    allow_whitespace: bool,

    /// Maximum parenthesis nesting depth (at most 1000)
    #[arg(long, default_value_t = grouper::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the scanned tokens (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Print the grouped tree (for debugging)
    #[arg(long)]
    debug_tree: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            scan: ScanOptions {
                allow_whitespace: self.allow_whitespace,
            },
            max_depth: self.max_depth,
        }
    }
}

fn print_stages(input: &str, args: &Args, options: &Options) {
    // Failures here are reported by `compute_with_options` afterwards.
    let Ok(tokens) = scanner::scan_with_options(input, options.scan) else {
        return;
    };

    if args.debug_tokens {
        println!("=== Tokens ===");
        for token in &tokens {
            println!("{:<8} {}", token.token.to_string(), token.span);
        }
        println!();
    }

    if args.debug_tree {
        if let Ok(tree) = grouper::group_with_max_depth(&tokens, options.max_depth) {
            println!("=== Tree ===");
            println!("{}", tree);
            println!();
        }
    }
}

/// Compute one line and print the answer or the error. Returns whether the
/// line succeeded.
fn interpret_input(input: &str, args: &Args, options: &Options) -> bool {
    if args.debug_tokens || args.debug_tree {
        print_stages(input, args, options);
    }

    match compute_with_options(input, options) {
        Ok(answer) => {
            println!("answer = {:.6}\n", answer);
            true
        }
        Err(e) => {
            if args.no_color {
                eprint!("{}", render_error_to_string_no_color(&e, input));
            } else {
                render_error(&e, input);
            }
            false
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = args.options();

    if args.self_test {
        let summary = selftest::run(&options, !args.no_color);
        tracing::info!(passed = summary.passed, failed = summary.failed, "self-test done");
        if summary.failed > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        if !interpret_input(expr, &args, &options) {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = repl::setup_reedline(args.allow_whitespace);

        println!("Tally REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if buffer.is_empty() {
                        continue;
                    }
                    interpret_input(&buffer, &args, &options);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            interpret_input(line, &args, &options);
        }
    }

    Ok(())
}
