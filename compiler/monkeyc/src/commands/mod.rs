//! Command handlers for the Monkey driver.
//!
//! Each submodule implements one CLI command. Handlers return `DriverError`
//! rather than exiting so the binary owns process status.

mod dump;
mod run;

pub use dump::dump_file;
pub use run::{evaluate_program, parse_run_args, run_file, RunOptions};
