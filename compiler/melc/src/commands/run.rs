//! The `run` command: evaluate an input file into an output file.

use std::path::{Path, PathBuf};

use mel_ir::StringInterner;

use crate::{
    evaluate_source, read_source, write_output, ProgramError, DEFAULT_INPUT, DEFAULT_OUTPUT,
    ERROR_OUTPUT,
};

/// Paths and flags for one `run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Print evaluator counters to stderr.
    pub profile: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            profile: false,
        }
    }
}

impl RunOptions {
    /// Parse `[INPUT [OUTPUT]] [--profile]`.
    ///
    /// Returns `None` on an unknown flag or a third positional argument.
    pub fn parse(args: &[String]) -> Option<Self> {
        let mut options = RunOptions::default();
        let mut positional = 0;
        for arg in args {
            if arg == "--profile" {
                options.profile = true;
            } else if arg.starts_with('-') {
                return None;
            } else {
                match positional {
                    0 => options.input = PathBuf::from(arg),
                    1 => options.output = PathBuf::from(arg),
                    _ => return None,
                }
                positional += 1;
            }
        }
        Some(options)
    }
}

/// Evaluate `options.input` and write the rendered result to `options.output`.
///
/// On failure the output file receives `ERROR` and the original error is
/// returned for the caller to report.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(input = %options.input.display(), output = %options.output.display())
)]
pub fn run_file(options: &RunOptions) -> Result<(), ProgramError> {
    match render(&options.input, options.profile) {
        Ok(text) => write_output(&options.output, &text),
        Err(error) => {
            if let Err(write_error) = write_output(&options.output, ERROR_OUTPUT) {
                tracing::warn!(%write_error, "could not record failure in output file");
            }
            Err(error)
        }
    }
}

fn render(input: &Path, profile: bool) -> Result<String, ProgramError> {
    let source = read_source(input)?;
    let interner = StringInterner::new();
    let evaluated = evaluate_source(&source, &interner, profile)?;
    if let Some(counters) = &evaluated.counters {
        eprintln!("{}", counters.report());
    }
    Ok(mel_fmt::render_result(&evaluated.value, &interner))
}
