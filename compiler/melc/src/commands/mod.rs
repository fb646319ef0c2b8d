//! Command handlers for the `mel` CLI.
//!
//! Each handler returns a [`ProgramError`] instead of exiting; `main` owns
//! reporting and the exit status.

mod debug;
mod run;

pub use debug::{eval_file, parse_file};
pub use run::{run_file, RunOptions};
