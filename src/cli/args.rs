//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--namespace <ns>` / `-n`: Namespace to operate in
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//!
//! # Dynamic flags
//!
//! The `bind` subcommand accepts trait parameter flags that only exist
//! once the trait catalog has been loaded. Its arguments are therefore
//! captured verbatim here and re-parsed against the synthesized flag set
//! in [`crate::cli::flags`].

use clap::{Parser, Subcommand};

/// oamctl - CLI for managing OAM applications and traits
#[derive(Parser, Debug)]
#[command(name = "oam")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Namespace to operate in (overrides config and environment)
    #[arg(short = 'n', long, global = true, value_name = "NS")]
    pub namespace: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Attach a trait to a component
    #[command(
        name = "bind",
        long_about = "Attach a trait to a component.\n\n\
            Synthesizes a trait object from the trait definition's template, \
            fills in parameter values from the trait's own flags, and writes \
            the result into the application's configuration. Run with only an \
            application name to see which traits apply to its workload.",
        after_help = "\
WORKFLOW EXAMPLES:
    # See which traits can be attached to an application
    oam bind frontend

    # Attach an autoscaler capped at 5 replicas
    oam bind frontend scaler --max=5

TRAIT FLAGS:
    Each trait declares its own parameters; they appear as --<name> flags
    with defaults taken from the trait definition."
    )]
    Bind {
        /// APPLICATION-NAME [TRAIT-NAME] [--<param>=<value> ...]
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "ARGS"
        )]
        args: Vec<String>,
    },

    /// List applications
    #[command(
        name = "ls",
        long_about = "List applications with workloads, traits, status and created time."
    )]
    Ls {
        /// Filter to one application name
        #[arg(short = 'a', long = "app", value_name = "NAME")]
        app: Option<String>,
    },

    /// Show the active environment settings
    #[command(name = "env")]
    Env,

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
