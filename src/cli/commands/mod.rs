//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves its inputs (arguments, dynamic flags, store lookups)
//! 2. Performs the store round trips it needs
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! Commands that talk to the store are async because they involve network
//! I/O. Each sync wrapper creates a Tokio runtime and blocks on the async
//! body; the bodies take `&dyn ResourceStore` so tests drive them with the
//! mock store directly.

mod bind;
mod completion;
mod env_cmd;
mod ls;

// Re-export command functions for testing and direct invocation
pub use bind::{bind, bind_with_store};
pub use completion::completion;
pub use env_cmd::env;
pub use ls::{ls, ls_with_store, render_table};

use crate::cli::args::{Cli, Command};
use crate::cli::error::CliError;
use crate::cli::Context;
use crate::ui::output::Verbosity;

/// Dispatch a parsed invocation to its handler.
pub fn dispatch(cli: Cli, verbosity: Verbosity) -> Result<(), CliError> {
    match cli.command {
        // Completion needs no environment and must work offline.
        Command::Completion { shell } => completion(shell),

        Command::Env => {
            let ctx = Context::load(cli.namespace, verbosity)?;
            env(&ctx)
        }

        Command::Bind { args } => {
            let ctx = Context::load(cli.namespace, verbosity)?;
            bind(&ctx, &args)
        }

        Command::Ls { app } => {
            let ctx = Context::load(cli.namespace, verbosity)?;
            ls(&ctx, app.as_deref())
        }
    }
}
