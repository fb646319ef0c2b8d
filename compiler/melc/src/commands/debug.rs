//! Inspection commands: `eval` and `parse` print to stdout.

use std::path::Path;

use mel_ir::StringInterner;
use mel_parse::parse_program;

use crate::{read_source, run_source, ProgramError};

/// Evaluate a file and print the result.
pub fn eval_file(path: &Path) -> Result<(), ProgramError> {
    let source = read_source(path)?;
    println!("{}", run_source(&source)?);
    Ok(())
}

/// Parse a file and print the tree back without evaluating it.
pub fn parse_file(path: &Path) -> Result<(), ProgramError> {
    let source = read_source(path)?;
    let interner = StringInterner::new();
    let program = parse_program(&source, &interner)?;
    println!("{}", mel_fmt::print_expr(&program, &interner));
    Ok(())
}
