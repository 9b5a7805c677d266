//! Monkey CLI
//!
//! Evaluates programs stored as JSON syntax trees.

use monkeyc::commands::{dump_file, parse_run_args, run_file};
use monkeyc::{init_tracing, DriverError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    let result = match args[1].as_str() {
        "run" => parse_run_args(&args[2..]).and_then(|(path, options)| run_file(&path, &options)),
        "dump" => match args.get(2) {
            Some(path) if args.len() == 3 => dump_file(path),
            _ => Err(DriverError::Usage(
                "usage: monkey dump <program.json>".to_string(),
            )),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(DriverError::Usage(format!("unknown command '{other}'"))),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        if matches!(err, DriverError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(err.exit_code());
    }
}

fn print_usage() {
    eprintln!("Monkey evaluator");
    eprintln!();
    eprintln!("Usage: monkey <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program.json> [options]   Evaluate a program and print its result");
    eprintln!("  dump <program.json>            Print a program as source text");
    eprintln!();
    eprintln!("Run options:");
    eprintln!("  --max-depth=<n>   Fail once function calls nest deeper than n");
    eprintln!("  -q, --quiet       Discard log() output");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG          Tracing filter (e.g. monkey_eval=debug)");
    eprintln!("  MONKEY_LOG_TREE   Render tracing spans as a tree");
}
