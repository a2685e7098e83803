//! core::template
//!
//! Decoding of trait templates from a definition's extension blob.
//!
//! # Design
//!
//! A [`Template`] is the parsed form of a [`TraitDefinition`]'s extension:
//! a base object skeleton plus the ordered parameter schema used to
//! synthesize CLI flags. Decoding is strict about shape (a missing or
//! malformed extension is an error the caller decides how to handle) but
//! open about parameter types: `"int"` is the only recognized non-string
//! kind, anything else degrades to a string parameter.
//!
//! [`TraitDefinition`]: crate::core::types::TraitDefinition

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::core::fieldpath;

/// Errors from template decoding.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The definition carries no extension at all.
    #[error("definition has no template extension")]
    MissingExtension,

    /// The extension does not match the template schema.
    #[error("malformed template: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A parameter declares a field path that does not parse.
    #[error("parameter {parameter:?}: {source}")]
    BadFieldPath {
        parameter: String,
        source: fieldpath::PathError,
    },
}

/// Kind of a template parameter: a closed two-way enum.
///
/// The wire value `"int"` maps to [`ParameterKind::Int`]; every other value
/// is treated as a string parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Int,
    Str,
}

impl Serialize for ParameterKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterKind::Int => serializer.serialize_str("int"),
            ParameterKind::Str => serializer.serialize_str("string"),
        }
    }
}

impl<'de> Deserialize<'de> for ParameterKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "int" => ParameterKind::Int,
            _ => ParameterKind::Str,
        })
    }
}

impl Default for ParameterKind {
    fn default() -> Self {
        ParameterKind::Str
    }
}

/// One declared template parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Flag name exposed on the CLI.
    pub name: String,

    /// Parameter kind (`"int"` or string).
    #[serde(rename = "type", default)]
    pub kind: ParameterKind,

    /// Default value, always carried as a string literal.
    #[serde(default)]
    pub default: String,

    /// Help text for the synthesized flag.
    #[serde(default)]
    pub usage: String,

    /// Dotted locations inside the base object this parameter writes to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_paths: Vec<String>,
}

/// A trait definition's template: base object plus parameter schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Short alias for the trait, shown in guidance output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    /// Partial resource document the trait object is synthesized from.
    pub object: Value,

    /// Ordered parameter descriptors.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// Decode a template from a definition's extension.
///
/// # Errors
///
/// Returns [`TemplateError::MissingExtension`] when `extension` is `None`,
/// [`TemplateError::Malformed`] when the blob does not match the template
/// schema, and [`TemplateError::BadFieldPath`] when a parameter's field
/// path does not parse as a dotted path.
pub fn decode(extension: Option<&Value>) -> Result<Template, TemplateError> {
    let raw = extension.ok_or(TemplateError::MissingExtension)?;
    let template: Template = serde_json::from_value(raw.clone())?;
    for parameter in &template.parameters {
        for path in &parameter.field_paths {
            fieldpath::validate(path).map_err(|source| TemplateError::BadFieldPath {
                parameter: parameter.name.clone(),
                source,
            })?;
        }
    }
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scaler_extension() -> Value {
        json!({
            "short": "scaler",
            "object": {
                "apiVersion": "core.oam.dev/v1alpha2",
                "kind": "ManualScalerTrait",
                "spec": { "replicaCount": 1 }
            },
            "parameters": [
                {
                    "name": "max",
                    "type": "int",
                    "default": "10",
                    "usage": "Maximum replica count",
                    "fieldPaths": ["spec.replicaCount"]
                }
            ]
        })
    }

    #[test]
    fn decodes_full_template() {
        let template = decode(Some(&scaler_extension())).unwrap();
        assert_eq!(template.short.as_deref(), Some("scaler"));
        assert_eq!(template.parameters.len(), 1);
        let p = &template.parameters[0];
        assert_eq!(p.name, "max");
        assert_eq!(p.kind, ParameterKind::Int);
        assert_eq!(p.default, "10");
        assert_eq!(p.field_paths, vec!["spec.replicaCount"]);
    }

    #[test]
    fn missing_extension_is_an_error() {
        assert!(matches!(decode(None), Err(TemplateError::MissingExtension)));
    }

    #[test]
    fn object_is_required() {
        let err = decode(Some(&json!({ "parameters": [] }))).unwrap_err();
        assert!(matches!(err, TemplateError::Malformed(_)));
    }

    #[test]
    fn unknown_parameter_type_degrades_to_string() {
        let template = decode(Some(&json!({
            "object": {},
            "parameters": [
                { "name": "policy", "type": "enum", "default": "auto" }
            ]
        })))
        .unwrap();
        assert_eq!(template.parameters[0].kind, ParameterKind::Str);
    }

    #[test]
    fn bad_field_path_is_an_error() {
        let err = decode(Some(&json!({
            "object": {},
            "parameters": [
                { "name": "max", "type": "int", "default": "1", "fieldPaths": ["spec..count"] }
            ]
        })))
        .unwrap_err();
        assert!(matches!(err, TemplateError::BadFieldPath { .. }));
    }

    #[test]
    fn parameter_kind_roundtrip() {
        assert_eq!(serde_json::to_value(ParameterKind::Int).unwrap(), json!("int"));
        assert_eq!(
            serde_json::to_value(ParameterKind::Str).unwrap(),
            json!("string")
        );
    }
}
