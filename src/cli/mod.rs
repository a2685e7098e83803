//! cli
//!
//! Command-line interface layer for oamctl.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the environment (namespace, API base, token)
//! - Delegate to command handlers
//! - Map errors to exit codes at a single seam
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers receive a [`Context`] plus a
//! `&dyn ResourceStore` where they need one, so every command runs
//! unchanged against the mock store in tests.

pub mod args;
pub mod commands;
pub mod error;
pub mod flags;

pub use args::{Cli, Shell};
pub use error::CliError;

use crate::core::config::Environment;
use crate::ui::output::Verbosity;

/// Per-invocation execution context.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved environment settings.
    pub env: Environment,
    /// Output verbosity from the global flags.
    pub verbosity: Verbosity,
}

impl Context {
    /// Resolve the context from global flags.
    pub fn load(flag_namespace: Option<String>, verbosity: Verbosity) -> Result<Self, CliError> {
        Ok(Self {
            env: Environment::load(flag_namespace)?,
            verbosity,
        })
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. The caller maps
/// the returned error onto an exit code via [`CliError::exit_code`].
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    commands::dispatch(cli, verbosity)
}
