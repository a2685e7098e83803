//! store::mock
//!
//! Mock resource store for deterministic testing.
//!
//! # Design
//!
//! The mock store keeps resources in memory, supports configuring failure
//! scenarios, and records every operation so tests can assert what was
//! (and was not) called — the bind command tests rely on the operation log
//! to prove no update was issued on validation-only paths.
//!
//! # Example
//!
//! ```
//! use oamctl::store::mock::MockStore;
//! use oamctl::store::ResourceStore;
//! use oamctl::core::types::{ApplicationConfiguration, ObjectMeta};
//!
//! # tokio_test::block_on(async {
//! let store = MockStore::new().with_application_configuration(ApplicationConfiguration {
//!     metadata: ObjectMeta::named("frontend"),
//!     ..Default::default()
//! });
//!
//! let config = store.get_application_configuration("frontend").await.unwrap();
//! assert_eq!(config.metadata.name, "frontend");
//! # });
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{ResourceStore, StoreError};
use crate::core::types::{ApplicationConfiguration, Component, TraitDefinition};

/// Mock store for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockStoreInner {
    trait_definitions: Vec<TraitDefinition>,
    components: HashMap<String, Component>,
    app_configs: HashMap<String, ApplicationConfiguration>,
    fail_on: Option<FailOn>,
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    ListTraitDefinitions(StoreError),
    GetTraitDefinition(StoreError),
    GetComponent(StoreError),
    GetApplicationConfiguration(StoreError),
    ListApplicationConfigurations(StoreError),
    Update(StoreError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq)]
pub enum MockOperation {
    ListTraitDefinitions,
    GetTraitDefinition { name: String },
    GetComponent { name: String },
    GetApplicationConfiguration { name: String },
    ListApplicationConfigurations,
    Update { name: String },
}

impl MockStore {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a trait definition.
    pub fn with_trait_definition(self, definition: TraitDefinition) -> Self {
        self.inner
            .lock()
            .unwrap()
            .trait_definitions
            .push(definition);
        self
    }

    /// Seed a component.
    pub fn with_component(self, component: Component) -> Self {
        self.inner
            .lock()
            .unwrap()
            .components
            .insert(component.metadata.name.clone(), component);
        self
    }

    /// Seed an application configuration.
    pub fn with_application_configuration(self, config: ApplicationConfiguration) -> Self {
        self.inner
            .lock()
            .unwrap()
            .app_configs
            .insert(config.metadata.name.clone(), config);
        self
    }

    /// Configure the mock to fail on a specific operation.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        self.inner.lock().unwrap().fail_on = Some(fail_on);
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Whether any update was recorded.
    pub fn saw_update(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .operations
            .iter()
            .any(|op| matches!(op, MockOperation::Update { .. }))
    }

    /// Get a stored application configuration (for test verification).
    pub fn application_configuration(&self, name: &str) -> Option<ApplicationConfiguration> {
        self.inner.lock().unwrap().app_configs.get(name).cloned()
    }

    fn record(&self, op: MockOperation) {
        self.inner.lock().unwrap().operations.push(op);
    }

    fn check_fail(&self, expected: &str) -> Option<StoreError> {
        let inner = self.inner.lock().unwrap();
        match &inner.fail_on {
            Some(FailOn::ListTraitDefinitions(e)) if expected == "list_trait_definitions" => {
                Some(e.clone())
            }
            Some(FailOn::GetTraitDefinition(e)) if expected == "get_trait_definition" => {
                Some(e.clone())
            }
            Some(FailOn::GetComponent(e)) if expected == "get_component" => Some(e.clone()),
            Some(FailOn::GetApplicationConfiguration(e))
                if expected == "get_application_configuration" =>
            {
                Some(e.clone())
            }
            Some(FailOn::ListApplicationConfigurations(e))
                if expected == "list_application_configurations" =>
            {
                Some(e.clone())
            }
            Some(FailOn::Update(e)) if expected == "update" => Some(e.clone()),
            _ => None,
        }
    }
}

#[async_trait]
impl ResourceStore for MockStore {
    async fn list_trait_definitions(&self) -> Result<Vec<TraitDefinition>, StoreError> {
        self.record(MockOperation::ListTraitDefinitions);
        if let Some(e) = self.check_fail("list_trait_definitions") {
            return Err(e);
        }
        Ok(self.inner.lock().unwrap().trait_definitions.clone())
    }

    async fn get_trait_definition(&self, name: &str) -> Result<TraitDefinition, StoreError> {
        self.record(MockOperation::GetTraitDefinition {
            name: name.to_string(),
        });
        if let Some(e) = self.check_fail("get_trait_definition") {
            return Err(e);
        }
        self.inner
            .lock()
            .unwrap()
            .trait_definitions
            .iter()
            .find(|d| d.metadata.name == name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("traitdefinitions {:?}", name)))
    }

    async fn get_component(&self, name: &str) -> Result<Component, StoreError> {
        self.record(MockOperation::GetComponent {
            name: name.to_string(),
        });
        if let Some(e) = self.check_fail("get_component") {
            return Err(e);
        }
        self.inner
            .lock()
            .unwrap()
            .components
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("components {:?}", name)))
    }

    async fn get_application_configuration(
        &self,
        name: &str,
    ) -> Result<ApplicationConfiguration, StoreError> {
        self.record(MockOperation::GetApplicationConfiguration {
            name: name.to_string(),
        });
        if let Some(e) = self.check_fail("get_application_configuration") {
            return Err(e);
        }
        self.inner
            .lock()
            .unwrap()
            .app_configs
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("applicationconfigurations {:?}", name)))
    }

    async fn list_application_configurations(
        &self,
    ) -> Result<Vec<ApplicationConfiguration>, StoreError> {
        self.record(MockOperation::ListApplicationConfigurations);
        if let Some(e) = self.check_fail("list_application_configurations") {
            return Err(e);
        }
        let mut configs: Vec<_> = self
            .inner
            .lock()
            .unwrap()
            .app_configs
            .values()
            .cloned()
            .collect();
        configs.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));
        Ok(configs)
    }

    async fn update_application_configuration(
        &self,
        config: &ApplicationConfiguration,
    ) -> Result<(), StoreError> {
        self.record(MockOperation::Update {
            name: config.metadata.name.clone(),
        });
        if let Some(e) = self.check_fail("update") {
            return Err(e);
        }

        let mut inner = self.inner.lock().unwrap();
        let existing = inner.app_configs.get(&config.metadata.name).ok_or_else(|| {
            StoreError::NotFound(format!(
                "applicationconfigurations {:?}",
                config.metadata.name
            ))
        })?;

        // Conditional update: a stale resourceVersion loses.
        if let (Some(stored), Some(incoming)) = (
            &existing.metadata.resource_version,
            &config.metadata.resource_version,
        ) {
            if stored != incoming {
                return Err(StoreError::Conflict(format!(
                    "applicationconfigurations {:?}: resourceVersion {} is stale",
                    config.metadata.name, incoming
                )));
            }
        }

        inner
            .app_configs
            .insert(config.metadata.name.clone(), config.clone());
        Ok(())
    }
}
