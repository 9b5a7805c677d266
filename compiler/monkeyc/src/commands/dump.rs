//! The `dump` command: print a program file back as source text.

use std::path::Path;

use crate::{load_program, DriverError};

pub fn dump_file(path: &str) -> Result<(), DriverError> {
    let program = load_program(Path::new(path))?;
    println!("{program}");
    Ok(())
}
