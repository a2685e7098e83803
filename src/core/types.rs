//! core::types
//!
//! Domain types for the OAM resource model.
//!
//! # Design
//!
//! These are wire types: they mirror the JSON documents served by the
//! resource API (camelCase field names, Kubernetes conventions). Fields the
//! tool never reads are not modeled; unknown fields are ignored on decode so
//! the tool stays compatible with richer server-side schemas.
//!
//! All of these resources are owned by the cluster control plane. The CLI
//! treats [`TraitDefinition`] and [`Component`] as read-only and mutates
//! only [`ApplicationConfiguration`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard object metadata carried by every resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Resource name, unique within a namespace.
    pub name: String,

    /// Namespace the resource lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Server-assigned creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    /// Opaque version token used for conditional updates.
    ///
    /// When present, an update is accepted only while the stored object
    /// still carries the same token; a concurrent writer surfaces as a
    /// conflict instead of a silent lost update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
}

impl ObjectMeta {
    /// Metadata with just a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A registered trait definition.
///
/// Declares a trait's canonical name (via metadata) and an extension blob
/// holding the serialized template (object skeleton + parameter schema).
/// See [`crate::core::template::Template`] for the decoded form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TraitDefinition {
    pub metadata: ObjectMeta,
    pub spec: TraitDefinitionSpec,
}

/// Spec of a [`TraitDefinition`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TraitDefinitionSpec {
    /// Workload kinds this trait applies to. Empty means every workload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applies_to_workloads: Vec<String>,

    /// Serialized template (decoded by [`crate::core::template`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<Value>,
}

/// A deployable unit referenced by name within an application.
///
/// The bind flow looks components up only for existence validation and to
/// read the workload kind for trait-applicability guidance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Component {
    pub metadata: ObjectMeta,
    pub spec: ComponentSpec,
}

/// Spec of a [`Component`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComponentSpec {
    /// Embedded workload document. Only its `kind` is inspected here.
    #[serde(default)]
    pub workload: Value,
}

impl Component {
    /// The `kind` of the embedded workload, if one is declared.
    pub fn workload_kind(&self) -> Option<&str> {
        self.spec.workload.get("kind").and_then(Value::as_str)
    }
}

/// The persisted resource binding components to their attached traits for
/// one application instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationConfiguration {
    pub metadata: ObjectMeta,
    pub spec: ApplicationConfigurationSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationConfigurationStatus>,
}

/// Spec of an [`ApplicationConfiguration`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationConfigurationSpec {
    #[serde(default)]
    pub components: Vec<AppConfigComponent>,
}

/// One component entry inside an application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigComponent {
    /// Name of the referenced [`Component`].
    pub component_name: String,

    /// Traits attached to this component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<ComponentTrait>,
}

/// A trait attached to a component: one arbitrary nested payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComponentTrait {
    /// The trait object synthesized from a template.
    #[serde(rename = "trait")]
    pub trait_: Value,
}

impl ComponentTrait {
    /// Display name for this trait: the payload's `metadata.name`, falling
    /// back to its `kind`.
    pub fn display_name(&self) -> &str {
        self.trait_
            .pointer("/metadata/name")
            .and_then(Value::as_str)
            .or_else(|| self.trait_.get("kind").and_then(Value::as_str))
            .unwrap_or("unknown")
    }
}

/// Status reported by the control plane for an application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationConfigurationStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

/// Derived, display-only summary of one application.
///
/// Produced by [`crate::apps`] and rendered by the `ls` command. Never
/// written back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationMeta {
    pub name: String,
    pub workload: String,
    pub traits: Vec<String>,
    pub status: String,
    pub created: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_meta_roundtrip_camel_case() {
        let meta = ObjectMeta {
            name: "frontend".to_string(),
            namespace: Some("default".to_string()),
            creation_timestamp: None,
            resource_version: Some("42".to_string()),
        };
        let v = serde_json::to_value(&meta).unwrap();
        assert_eq!(v["name"], "frontend");
        assert_eq!(v["resourceVersion"], "42");
        let back: ObjectMeta = serde_json::from_value(v).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn trait_definition_tolerates_unknown_fields() {
        let def: TraitDefinition = serde_json::from_value(json!({
            "apiVersion": "core.oam.dev/v1alpha2",
            "kind": "TraitDefinition",
            "metadata": { "name": "manualscalertraits.core.oam.dev" },
            "spec": {
                "appliesToWorkloads": ["ContainerizedWorkload"],
                "definitionRef": { "name": "ignored" },
                "extension": { "object": {}, "parameters": [] }
            }
        }))
        .unwrap();
        assert_eq!(def.metadata.name, "manualscalertraits.core.oam.dev");
        assert_eq!(def.spec.applies_to_workloads, vec!["ContainerizedWorkload"]);
        assert!(def.spec.extension.is_some());
    }

    #[test]
    fn component_workload_kind() {
        let component: Component = serde_json::from_value(json!({
            "metadata": { "name": "frontend" },
            "spec": {
                "workload": {
                    "apiVersion": "core.oam.dev/v1alpha2",
                    "kind": "ContainerizedWorkload"
                }
            }
        }))
        .unwrap();
        assert_eq!(component.workload_kind(), Some("ContainerizedWorkload"));

        let bare = Component::default();
        assert_eq!(bare.workload_kind(), None);
    }

    #[test]
    fn component_trait_display_name_prefers_metadata_name() {
        let t = ComponentTrait {
            trait_: json!({
                "kind": "ManualScalerTrait",
                "metadata": { "name": "scaler" }
            }),
        };
        assert_eq!(t.display_name(), "scaler");

        let kind_only = ComponentTrait {
            trait_: json!({ "kind": "ManualScalerTrait" }),
        };
        assert_eq!(kind_only.display_name(), "ManualScalerTrait");

        let empty = ComponentTrait { trait_: json!({}) };
        assert_eq!(empty.display_name(), "unknown");
    }

    #[test]
    fn app_config_component_serializes_component_name_camel_case() {
        let entry = AppConfigComponent {
            component_name: "frontend".to_string(),
            traits: vec![],
        };
        let v = serde_json::to_value(&entry).unwrap();
        assert_eq!(v["componentName"], "frontend");
        assert!(v.get("traits").is_none());
    }
}
