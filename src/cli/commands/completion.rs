//! completion command - Generate shell completion scripts
//!
//! Completions cover the static surface only; trait parameter flags are
//! synthesized per invocation and cannot be completed ahead of time.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::args::{Cli, Shell};
use crate::cli::error::CliError;

/// Generate shell completion scripts.
pub fn completion(shell: Shell) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => {
            generate(shells::Bash, &mut cmd, &name, &mut std::io::stdout());
        }
        Shell::Zsh => {
            generate(shells::Zsh, &mut cmd, &name, &mut std::io::stdout());
        }
        Shell::Fish => {
            generate(shells::Fish, &mut cmd, &name, &mut std::io::stdout());
        }
        Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, &name, &mut std::io::stdout());
        }
    }

    Ok(())
}
