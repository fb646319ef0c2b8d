//! Mel interpreter CLI.

use std::path::Path;

use melc::commands::{eval_file, parse_file, run_file, RunOptions};
use melc::ProgramError;

fn main() {
    melc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        finish(run_file(&RunOptions::default()));
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let Some(options) = RunOptions::parse(&args[2..]) else {
                eprintln!("Usage: mel run [INPUT [OUTPUT]] [--profile]");
                std::process::exit(1);
            };
            finish(run_file(&options));
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: mel eval <file>");
                std::process::exit(1);
            }
            finish(eval_file(Path::new(&args[2])));
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: mel parse <file>");
                std::process::exit(1);
            }
            finish(parse_file(Path::new(&args[2])));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("mel {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            print_usage();
            std::process::exit(1);
        }
    }
}

fn finish(result: Result<(), ProgramError>) {
    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Mel - a tiny expression language interpreter");
    println!();
    println!("Usage: mel [command] [args]");
    println!();
    println!("With no command, evaluates input.txt into output.txt.");
    println!();
    println!("Commands:");
    println!("  run [INPUT [OUTPUT]] [--profile]");
    println!("                  Evaluate INPUT and write the result to OUTPUT");
    println!("  eval <file>     Evaluate a file and print the result");
    println!("  parse <file>    Parse a file and print the tree back");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("On failure the output file contains ERROR and the exit status is 1.");
    println!("Set RUST_LOG (e.g. RUST_LOG=mel_eval=trace) for tracing output.");
}
