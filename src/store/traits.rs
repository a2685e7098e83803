//! store::traits
//!
//! Resource store trait definition.
//!
//! # Design
//!
//! The `ResourceStore` trait is async because store operations involve
//! network I/O. All methods return `Result` so callers can map failures
//! into the CLI's error taxonomy. The contract is read/list/replace: there
//! is no partial-patch primitive, and every operation is attempted exactly
//! once — retries are nobody's job here.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{ApplicationConfiguration, Component, TraitDefinition};

/// Errors from store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An update lost against a concurrent writer (stale resourceVersion).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Authentication failed (missing, invalid or insufficient token).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Interface to the backing resource store.
///
/// Implementations: [`RestStore`] against a live API server, [`MockStore`]
/// for deterministic tests.
///
/// [`RestStore`]: crate::store::rest::RestStore
/// [`MockStore`]: crate::store::mock::MockStore
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// List every registered trait definition in the namespace.
    async fn list_trait_definitions(&self) -> Result<Vec<TraitDefinition>, StoreError>;

    /// Fetch one trait definition by canonical name.
    async fn get_trait_definition(&self, name: &str) -> Result<TraitDefinition, StoreError>;

    /// Fetch one component by name.
    async fn get_component(&self, name: &str) -> Result<Component, StoreError>;

    /// Fetch one application configuration by name.
    async fn get_application_configuration(
        &self,
        name: &str,
    ) -> Result<ApplicationConfiguration, StoreError>;

    /// List every application configuration in the namespace.
    async fn list_application_configurations(
        &self,
    ) -> Result<Vec<ApplicationConfiguration>, StoreError>;

    /// Replace an application configuration by identity.
    ///
    /// When the object carries a `resourceVersion`, the write is
    /// conditional: a stale token yields [`StoreError::Conflict`].
    async fn update_application_configuration(
        &self,
        config: &ApplicationConfiguration,
    ) -> Result<(), StoreError>;
}
