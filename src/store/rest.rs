//! store::rest
//!
//! REST implementation of the resource store.
//!
//! # Design
//!
//! Targets a Kubernetes-style resource API: namespaced collection and item
//! paths under a fixed group/version, GET for reads, PUT for replace
//! updates, list responses enveloped in `{"items": [...]}` and error
//! bodies carrying a `message` field.
//!
//! # Authentication
//!
//! A bearer token from the environment config is attached to every request
//! when present. Anonymous access is fine for proxied local endpoints.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use async_trait::async_trait;

use super::traits::{ResourceStore, StoreError};
use crate::core::types::{ApplicationConfiguration, Component, TraitDefinition};

/// API group/version prefix for all resource paths.
const API_PREFIX: &str = "apis/core.oam.dev/v1alpha2";

/// List response envelope.
#[derive(Debug, Deserialize)]
struct List<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Error body returned by the API server.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Resource store backed by a live API server.
pub struct RestStore {
    /// HTTP client for making requests.
    client: Client,
    /// API base URL, e.g. `http://127.0.0.1:8001`.
    api_base: String,
    /// Namespace all operations are scoped to.
    namespace: String,
    /// Optional bearer token.
    token: Option<String>,
}

// Custom Debug to avoid exposing the token.
impl std::fmt::Debug for RestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestStore")
            .field("api_base", &self.api_base)
            .field("namespace", &self.namespace)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl RestStore {
    /// Create a store scoped to one namespace.
    pub fn new(
        api_base: impl Into<String>,
        namespace: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            namespace: namespace.into(),
            token,
        }
    }

    /// The namespace this store operates in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Build the URL for a namespaced collection, e.g. `traitdefinitions`.
    fn collection_url(&self, plural: &str) -> String {
        format!(
            "{}/{}/namespaces/{}/{}",
            self.api_base, API_PREFIX, self.namespace, plural
        )
    }

    /// Build the URL for one named resource.
    fn item_url(&self, plural: &str, name: &str) -> String {
        format!("{}/{}", self.collection_url(plural), name)
    }

    /// Standard headers for every request.
    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| StoreError::AuthFailed(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: String) -> Result<T, StoreError> {
        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;
        self.handle_response(response).await
    }

    /// Handle an API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| StoreError::ApiError {
                status: status.as_u16(),
                message: format!("failed to parse response: {}", e),
            })
        } else {
            Err(self.error_from(response, status).await)
        }
    }

    /// Map an error response onto [`StoreError`].
    async fn error_from(&self, response: Response, status: StatusCode) -> StoreError {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message.unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => StoreError::AuthFailed("invalid or expired token".into()),
            StatusCode::FORBIDDEN => StoreError::AuthFailed(message),
            StatusCode::NOT_FOUND => StoreError::NotFound(message),
            StatusCode::CONFLICT => StoreError::Conflict(message),
            _ if status.is_server_error() => StoreError::ApiError {
                status: status.as_u16(),
                message: format!("server error: {}", message),
            },
            _ => StoreError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl ResourceStore for RestStore {
    async fn list_trait_definitions(&self) -> Result<Vec<TraitDefinition>, StoreError> {
        let list: List<TraitDefinition> =
            self.get_json(self.collection_url("traitdefinitions")).await?;
        Ok(list.items)
    }

    async fn get_trait_definition(&self, name: &str) -> Result<TraitDefinition, StoreError> {
        self.get_json(self.item_url("traitdefinitions", name)).await
    }

    async fn get_component(&self, name: &str) -> Result<Component, StoreError> {
        self.get_json(self.item_url("components", name)).await
    }

    async fn get_application_configuration(
        &self,
        name: &str,
    ) -> Result<ApplicationConfiguration, StoreError> {
        self.get_json(self.item_url("applicationconfigurations", name))
            .await
    }

    async fn list_application_configurations(
        &self,
    ) -> Result<Vec<ApplicationConfiguration>, StoreError> {
        let list: List<ApplicationConfiguration> = self
            .get_json(self.collection_url("applicationconfigurations"))
            .await?;
        Ok(list.items)
    }

    async fn update_application_configuration(
        &self,
        config: &ApplicationConfiguration,
    ) -> Result<(), StoreError> {
        let url = self.item_url("applicationconfigurations", &config.metadata.name);
        let response = self
            .client
            .put(&url)
            .headers(self.headers()?)
            .json(config)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from(response, status).await)
        }
    }
}
