//! `braille` — Translates a line of text to six-dot Braille cells, or back.
//!
//! All positional arguments are joined with single spaces into one input.
//! The direction is detected from the input unless forced.
//!
//! **Usage:**
//! ```
//! braille [--encode | --decode] [--lenient] [--format <text|json>] <TEXT>...
//! ```
//!
//! Exits non-zero if translation fails, with one exit code per failure kind.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, Write};
use std::process;

use anyhow::{anyhow, Context, Result};
use braille::{Direction, ErrorKind, Options, Translator, UnknownCellPolicy};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Translate between English text and six-dot Braille cells.
#[derive(Parser)]
#[command(
    name = "braille",
    about = "Translate English text to six-dot Braille cells and back"
)]
struct Args {
    /// Text or Braille cells; several arguments are joined with single spaces.
    text: Vec<String>,

    /// Always encode text to Braille.
    #[arg(long, conflicts_with = "decode")]
    encode: bool,

    /// Always decode Braille to text.
    #[arg(long)]
    decode: bool,

    /// Skip unrecognised cells instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// How the translation is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The translation alone.
    Text,
    /// A JSON object with direction, input and output.
    Json,
}

impl Args {
    fn input(&self) -> String {
        self.text.join(" ")
    }

    fn options(&self) -> Options {
        let direction = if self.encode {
            Some(Direction::Encode)
        } else if self.decode {
            Some(Direction::Decode)
        } else {
            None
        };
        let unknown_cells = if self.lenient {
            UnknownCellPolicy::Skip
        } else {
            UnknownCellPolicy::Reject
        };
        Options {
            unknown_cells,
            direction,
        }
    }
}

/// JSON rendering of one translation.
#[derive(Serialize)]
struct Report<'a> {
    direction: &'static str,
    input: &'a str,
    output: &'a str,
}

/// Process exit code for each codec failure.
fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::EmptyInput => 3,
        ErrorKind::InvalidCharacter => 4,
        ErrorKind::InvalidLength => 5,
        ErrorKind::UnknownCell => 6,
    }
}

fn render(format: Format, direction: Direction, input: &str, output: &str) -> Result<String> {
    match format {
        Format::Text => Ok(output.to_owned()),
        Format::Json => {
            let report = Report {
                direction: direction.as_str(),
                input,
                output,
            };
            serde_json::to_string(&report).context("failed to serialize report")
        }
    }
}

/// Logs go to stderr so stdout carries only the translation.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let input = args.input();
    let translator = Translator::new(args.options());
    let direction = translator.direction_for(&input);
    debug!(%direction, words = args.text.len(), "input assembled");

    match translator.translate_as(direction, &input) {
        Ok(output) => {
            let rendered = render(args.format, direction, &input, &output)?;
            writeln!(io::stdout().lock(), "{rendered}").context("failed to write output")?;
            Ok(())
        }
        Err(err) => {
            let kind = err.kind();
            debug!(kind = kind.as_str(), "translation failed");
            eprintln!("error[{}]: {}", kind.as_str(), err);
            process::exit(exit_code(kind));
        }
    }
}
