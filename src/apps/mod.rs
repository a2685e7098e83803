//! apps
//!
//! Application summary queries for the `ls` command.
//!
//! # Design
//!
//! Summaries are a read-only projection: one [`ApplicationMeta`] per
//! matching application configuration. The projection is best-effort per
//! field — a component that cannot be fetched degrades that application's
//! workload column to `Unknown` rather than failing the whole listing.

use crate::core::types::{ApplicationConfiguration, ApplicationMeta};
use crate::store::{ResourceStore, StoreError};

/// Placeholder for fields the store has no answer for.
const UNKNOWN: &str = "Unknown";

/// Query summary records for applications in the store's namespace,
/// optionally filtered to one application name.
///
/// # Errors
///
/// Fails only when the application list itself cannot be fetched.
pub async fn applications(
    store: &dyn ResourceStore,
    name_filter: Option<&str>,
) -> Result<Vec<ApplicationMeta>, StoreError> {
    let configs = store.list_application_configurations().await?;

    let mut metas = Vec::with_capacity(configs.len());
    for config in configs {
        if let Some(filter) = name_filter {
            if config.metadata.name != filter {
                continue;
            }
        }
        metas.push(summarize(store, &config).await);
    }
    Ok(metas)
}

/// Project one application configuration onto its summary row.
async fn summarize(
    store: &dyn ResourceStore,
    config: &ApplicationConfiguration,
) -> ApplicationMeta {
    let workload = match config.spec.components.first() {
        Some(entry) => match store.get_component(&entry.component_name).await {
            Ok(component) => component
                .workload_kind()
                .unwrap_or(UNKNOWN)
                .to_string(),
            Err(_) => UNKNOWN.to_string(),
        },
        None => UNKNOWN.to_string(),
    };

    let traits = config
        .spec
        .components
        .iter()
        .flat_map(|entry| entry.traits.iter())
        .map(|t| t.display_name().to_string())
        .collect();

    let status = config
        .status
        .as_ref()
        .and_then(|s| s.phase.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    ApplicationMeta {
        name: config.metadata.name.clone(),
        workload,
        traits,
        status,
        created: config.metadata.creation_timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{
        AppConfigComponent, ApplicationConfigurationStatus, Component, ComponentTrait, ObjectMeta,
    };
    use crate::store::mock::MockStore;
    use serde_json::json;

    fn app(name: &str, component: &str, trait_names: &[&str]) -> ApplicationConfiguration {
        ApplicationConfiguration {
            metadata: ObjectMeta::named(name),
            spec: crate::core::types::ApplicationConfigurationSpec {
                components: vec![AppConfigComponent {
                    component_name: component.to_string(),
                    traits: trait_names
                        .iter()
                        .map(|n| ComponentTrait {
                            trait_: json!({ "metadata": { "name": n } }),
                        })
                        .collect(),
                }],
            },
            status: Some(ApplicationConfigurationStatus {
                phase: Some("Running".to_string()),
            }),
        }
    }

    fn component(name: &str, kind: &str) -> Component {
        Component {
            metadata: ObjectMeta::named(name),
            spec: crate::core::types::ComponentSpec {
                workload: json!({ "kind": kind }),
            },
        }
    }

    #[tokio::test]
    async fn summarizes_each_application() {
        let store = MockStore::new()
            .with_application_configuration(app("frontend", "frontend", &["scaler", "rollout"]))
            .with_component(component("frontend", "ContainerizedWorkload"));

        let metas = applications(&store, None).await.unwrap();
        assert_eq!(metas.len(), 1);
        let meta = &metas[0];
        assert_eq!(meta.name, "frontend");
        assert_eq!(meta.workload, "ContainerizedWorkload");
        assert_eq!(meta.traits, vec!["scaler", "rollout"]);
        assert_eq!(meta.status, "Running");
    }

    #[tokio::test]
    async fn name_filter_selects_one() {
        let store = MockStore::new()
            .with_application_configuration(app("frontend", "frontend", &[]))
            .with_application_configuration(app("backend", "backend", &[]));

        let metas = applications(&store, Some("backend")).await.unwrap();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "backend");

        let none = applications(&store, Some("ghost")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn missing_component_degrades_to_unknown() {
        let store =
            MockStore::new().with_application_configuration(app("frontend", "ghost", &[]));

        let metas = applications(&store, None).await.unwrap();
        assert_eq!(metas[0].workload, "Unknown");
    }

    #[tokio::test]
    async fn list_failure_propagates() {
        let store = MockStore::new().fail_on(
            crate::store::mock::FailOn::ListApplicationConfigurations(StoreError::NetworkError(
                "boom".into(),
            )),
        );
        assert!(applications(&store, None).await.is_err());
    }
}
