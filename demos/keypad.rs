//! Keypad Demo
//!
//! Drives a calculator session from the command line, the way a GUI shell
//! would drive it from buttons and keys. Every frame sent to the display is
//! printed.
//!
//! Key bindings:
//! - `0`-`9` and `.` enter numbers
//! - `+ - * / %` are operators, `=` evaluates
//! - `c` clears, DEL or ^H deletes the last digit
//! - `s` toggles the sign, `q` squares, `@` takes the square root,
//!   `r` takes the reciprocal
//!
//! Run with: cargo run --example keypad -- "2+3*4="
//! or pipe lines on stdin: echo "5/0=" | cargo run --example keypad

use clap::Parser;
use keycalc::config::{CalculatorBuilder, EngineConfig, EqualsPolicy};
use keycalc::input::Input;
use keycalc::shell::Session;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Feed key sequences to a keycalc session.
#[derive(Parser, Debug)]
#[command(name = "keypad", version, about)]
struct Args {
    /// Key sequences to feed; stdin lines are read when none are given.
    keys: Vec<String>,

    /// JSON engine configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Repeat the last operation on repeated equals.
    #[arg(long)]
    repeat_equals: bool,

    /// Print the phase transition history when done.
    #[arg(long)]
    history: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    let mut builder = CalculatorBuilder::from_config(config);
    if args.repeat_equals {
        builder = builder.equals_policy(EqualsPolicy::RepeatLast);
    }
    let calculator = builder.build()?;

    let mut session = Session::with_calculator(calculator, |text: &str| {
        println!("[{text:>20}]");
    });

    if args.keys.is_empty() {
        for line in io::stdin().lock().lines() {
            feed(&mut session, &line?);
        }
    } else {
        for keys in &args.keys {
            feed(&mut session, keys);
        }
    }

    if args.history {
        println!("\nPath: {}", session.history().path().join(" -> "));
        for transition in session.history().transitions() {
            println!(
                "  {:>3}  {:<22} {:<22} {}",
                transition.input.to_string(),
                transition.from.name(),
                transition.to.name(),
                transition.display
            );
        }
    }

    Ok(())
}

fn feed<D: keycalc::DisplaySink>(session: &mut Session<D>, keys: &str) {
    for ch in keys.chars().filter(|ch| !ch.is_whitespace()) {
        match Input::from_char(ch) {
            Some(input) => {
                session.handle(input);
            }
            None => eprintln!("ignoring unbound key '{ch}'"),
        }
    }
}
