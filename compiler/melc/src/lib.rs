//! Mel driver library.
//!
//! Wires the reader, evaluator and printer together and owns everything the
//! core crates leave to their caller: file I/O, the `ERROR` convention, and
//! tracing setup. The `mel` binary is a thin argument parser over
//! [`commands`].

pub mod commands;

use std::path::{Path, PathBuf};
use std::sync::Once;

use mel_eval::{EvalCounters, EvalError, Interpreter};
use mel_ir::{Environment, StringInterner, Value};
use mel_parse::{parse_program, ParseError};

/// Text written to the output sink when a program fails.
pub const ERROR_OUTPUT: &str = "ERROR";

/// Input file used when `mel` runs without arguments.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Output file used when `mel` runs without arguments.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Any failure between reading a program and writing its result.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl ProgramError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ProgramError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A successful evaluation.
#[derive(Debug)]
pub struct Evaluated {
    pub value: Value,
    /// Present when the run was profiled.
    pub counters: Option<EvalCounters>,
}

/// Parse and evaluate `source`.
#[tracing::instrument(level = "debug", skip_all, fields(profile = profile))]
pub fn evaluate_source(
    source: &str,
    interner: &StringInterner,
    profile: bool,
) -> Result<Evaluated, ProgramError> {
    let program = parse_program(source, interner)?;
    tracing::debug!(root = program.kind_name(), "parsed program");

    let mut interpreter = Interpreter::new(interner);
    if profile {
        interpreter = interpreter.with_counters();
    }
    let value = interpreter.eval(&program, &Environment::new())?;
    tracing::debug!(result = value.kind_name(), "evaluated program");

    Ok(Evaluated {
        value,
        counters: interpreter.counters().cloned(),
    })
}

/// Parse, evaluate and render `source`.
pub fn run_source(source: &str) -> Result<String, ProgramError> {
    let interner = StringInterner::new();
    let evaluated = evaluate_source(source, &interner, false)?;
    Ok(mel_fmt::render_result(&evaluated.value, &interner))
}

pub fn read_source(path: &Path) -> Result<String, ProgramError> {
    std::fs::read_to_string(path).map_err(|e| ProgramError::io(path, e))
}

pub fn write_output(path: &Path, text: &str) -> Result<(), ProgramError> {
    std::fs::write(path, text).map_err(|e| ProgramError::io(path, e))
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
