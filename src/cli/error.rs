//! cli::error
//!
//! The CLI's error taxonomy and exit-code mapping.
//!
//! # Design
//!
//! Three tiers, each with its own exit code, so scripts can tell a typo
//! from a flaky API server from a broken cluster-side definition:
//!
//! - **Usage** (exit 2): bad CLI input — missing or extra arguments, an
//!   unknown trait or component name, bad local configuration.
//! - **Store** (exit 1): store communication failure, wrapping the
//!   underlying error text.
//! - **Definition** (exit 3): a cluster-side resource is inconsistent —
//!   a malformed parameter default or an undecodable template on the
//!   trait being bound. These are operator problems, not user problems.
//!
//! Errors propagate to a single handler in `main`, which prints the
//! message and exits with the mapped code.

use thiserror::Error;

use crate::core::config::ConfigError;

/// A failure the CLI reports to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad CLI input.
    #[error("{0}")]
    Usage(String),

    /// Store communication failure.
    #[error("{0}")]
    Store(String),

    /// Cluster-side definition inconsistency.
    #[error("{0}")]
    Definition(String),

    /// Local configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// A usage-tier error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// A store-tier error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// A definition-tier error.
    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition(message.into())
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Store(_) => 1,
            CliError::Usage(_) | CliError::Config(_) => 2,
            CliError::Definition(_) => 3,
        }
    }
}
