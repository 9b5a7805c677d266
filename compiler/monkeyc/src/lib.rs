//! Monkey driver library.
//!
//! There is no parser in this workspace: programs arrive as the JSON form of
//! a `monkey_ir::Program` (the AST's serde representation). The `monkey`
//! binary is a thin argument parser over the commands defined here.

pub mod commands;

use std::path::{Path, PathBuf};
use std::sync::Once;

use monkey_eval::EvalError;
use monkey_ir::Program;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` or `MONKEY_LOG_TREE` is set. `RUST_LOG`
/// selects what is recorded (default `debug` when only the tree is
/// requested). With `MONKEY_LOG_TREE` set, spans render as an indented tree
/// instead of flat lines. Log output always goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let want_tree = std::env::var_os("MONKEY_LOG_TREE").is_some();
        if std::env::var_os("RUST_LOG").is_none() && !want_tree {
            return;
        }

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let tree = want_tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });
        let flat = (!want_tree).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(tree)
            .with(flat)
            .init();
    });
}

/// Failures the driver reports to the user.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("error: {0}")]
    Usage(String),

    #[error("error: cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error: invalid program '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The program itself failed.
    #[error("ERROR: {0}")]
    Eval(#[from] EvalError),
}

impl DriverError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage(_) => 2,
            DriverError::Io { .. } | DriverError::Json { .. } | DriverError::Eval(_) => 1,
        }
    }
}

/// Decode a program from its JSON form.
pub fn parse_program(json: &str) -> Result<Program, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and decode a program file.
pub fn load_program(path: &Path) -> Result<Program, DriverError> {
    let json = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&json).map_err(|source| DriverError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        statements = program.statements.len(),
        "loaded program"
    );
    Ok(program)
}
