//! cli::flags
//!
//! Dynamic flag synthesis from trait parameter schemas.
//!
//! # Design
//!
//! A two-phase static contract. Phase one walks the loaded catalog and
//! produces typed [`FlagSpec`] descriptors; this is where a malformed
//! integer default is caught, before any command-specific logic runs.
//! Phase two is a generic registration routine that folds descriptors
//! into a `clap::Command` — no type dispatch beyond the closed
//! integer/string pair.
//!
//! Two traits may declare parameters with the same name; the first
//! registration wins and later duplicates are skipped, keeping flag
//! parsing deterministic.

use std::collections::HashSet;

use clap::{value_parser, Arg, Command};
use thiserror::Error;

use crate::catalog::TraitCatalog;
use crate::core::template::ParameterKind;

/// Errors from flag synthesis.
#[derive(Debug, Error)]
pub enum FlagError {
    /// An integer parameter's default is not an integer. This is a broken
    /// trait definition, not a user mistake.
    #[error(
        "parameter {name:?} declares integer default {value:?}: {source}. \
         Please report this to the OAM maintainers, thanks."
    )]
    BadIntDefault {
        name: String,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Default value of a synthesized flag; the variant is the flag's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagDefault {
    Int(i64),
    Str(String),
}

/// Typed descriptor for one synthesized flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: String,
    pub usage: String,
    pub default: FlagDefault,
}

impl FlagSpec {
    /// The parameter kind this flag was synthesized from.
    pub fn kind(&self) -> ParameterKind {
        match self.default {
            FlagDefault::Int(_) => ParameterKind::Int,
            FlagDefault::Str(_) => ParameterKind::Str,
        }
    }
}

/// Phase one: descriptors for every parameter declared across the catalog.
///
/// # Errors
///
/// Returns [`FlagError::BadIntDefault`] for the first integer parameter
/// whose default does not parse; callers treat this as a definition
/// inconsistency and abort the invocation.
pub fn flag_specs(catalog: &TraitCatalog) -> Result<Vec<FlagSpec>, FlagError> {
    // "help" stays reserved for clap's own flag.
    let mut seen: HashSet<String> = HashSet::from(["help".to_string()]);
    let mut specs = Vec::new();

    for entry in catalog.entries() {
        for parameter in &entry.template.parameters {
            if !seen.insert(parameter.name.clone()) {
                continue;
            }
            let default = match parameter.kind {
                ParameterKind::Int => {
                    let value =
                        parameter
                            .default
                            .parse::<i64>()
                            .map_err(|source| FlagError::BadIntDefault {
                                name: parameter.name.clone(),
                                value: parameter.default.clone(),
                                source,
                            })?;
                    FlagDefault::Int(value)
                }
                ParameterKind::Str => FlagDefault::Str(parameter.default.clone()),
            };
            specs.push(FlagSpec {
                name: parameter.name.clone(),
                usage: parameter.usage.clone(),
                default,
            });
        }
    }
    Ok(specs)
}

/// Phase two: fold descriptors into a command as `--<name>` flags.
pub fn register(mut command: Command, specs: &[FlagSpec]) -> Command {
    for spec in specs {
        let arg = Arg::new(spec.name.clone())
            .long(spec.name.clone())
            .help(spec.usage.clone());
        let arg = match &spec.default {
            FlagDefault::Int(value) => arg
                .value_parser(value_parser!(i64))
                .default_value(value.to_string()),
            FlagDefault::Str(value) => arg.default_value(value.clone()),
        };
        command = command.arg(arg);
    }
    command
}

/// The full argument matcher for one `bind` invocation: two optional
/// positionals, a hidden catch-all for extras, and every synthesized flag.
pub fn bind_command(specs: &[FlagSpec]) -> Command {
    let command = Command::new("bind")
        .about("Attach a trait to a component")
        .no_binary_name(true)
        .arg(Arg::new("component").value_name("APPLICATION-NAME"))
        .arg(Arg::new("trait").value_name("TRAIT-NAME"))
        .arg(Arg::new("extra").num_args(0..).hide(true));
    register(command, specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ObjectMeta, TraitDefinition, TraitDefinitionSpec};
    use crate::ui::output::Verbosity;
    use serde_json::json;

    fn catalog_with(extensions: Vec<(&str, serde_json::Value)>) -> TraitCatalog {
        let definitions = extensions
            .into_iter()
            .map(|(name, extension)| TraitDefinition {
                metadata: ObjectMeta::named(name),
                spec: TraitDefinitionSpec {
                    applies_to_workloads: vec![],
                    extension: Some(extension),
                },
            })
            .collect();
        TraitCatalog::from_definitions(definitions, Verbosity::Quiet)
    }

    #[test]
    fn specs_cover_int_and_string_parameters() {
        let catalog = catalog_with(vec![(
            "scaler",
            json!({
                "object": {},
                "parameters": [
                    { "name": "max", "type": "int", "default": "10", "usage": "max replicas" },
                    { "name": "policy", "type": "string", "default": "auto" }
                ]
            }),
        )]);
        let specs = flag_specs(&catalog).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].default, FlagDefault::Int(10));
        assert_eq!(specs[0].kind(), ParameterKind::Int);
        assert_eq!(specs[1].default, FlagDefault::Str("auto".to_string()));
    }

    #[test]
    fn bad_int_default_is_an_error() {
        let catalog = catalog_with(vec![(
            "scaler",
            json!({
                "object": {},
                "parameters": [
                    { "name": "max", "type": "int", "default": "ten" }
                ]
            }),
        )]);
        let err = flag_specs(&catalog).unwrap_err();
        assert!(matches!(err, FlagError::BadIntDefault { .. }));
        assert!(err.to_string().contains("report this to the OAM maintainers"));
    }

    #[test]
    fn duplicate_names_register_once() {
        let catalog = catalog_with(vec![
            (
                "scaler",
                json!({
                    "object": {},
                    "parameters": [{ "name": "max", "type": "int", "default": "10" }]
                }),
            ),
            (
                "rollout",
                json!({
                    "object": {},
                    "parameters": [{ "name": "max", "type": "string", "default": "all" }]
                }),
            ),
        ]);
        let specs = flag_specs(&catalog).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].default, FlagDefault::Int(10));
    }

    #[test]
    fn help_is_reserved() {
        let catalog = catalog_with(vec![(
            "odd",
            json!({
                "object": {},
                "parameters": [{ "name": "help", "type": "string", "default": "" }]
            }),
        )]);
        assert!(flag_specs(&catalog).unwrap().is_empty());
    }

    #[test]
    fn bind_command_parses_positionals_and_flags() {
        let specs = vec![FlagSpec {
            name: "max".to_string(),
            usage: "max replicas".to_string(),
            default: FlagDefault::Int(10),
        }];
        let matches = bind_command(&specs)
            .try_get_matches_from(["frontend", "scaler", "--max=5"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("component").map(String::as_str),
            Some("frontend")
        );
        assert_eq!(
            matches.get_one::<String>("trait").map(String::as_str),
            Some("scaler")
        );
        assert_eq!(matches.get_one::<i64>("max"), Some(&5));
    }

    #[test]
    fn bind_command_applies_defaults() {
        let specs = vec![FlagSpec {
            name: "max".to_string(),
            usage: String::new(),
            default: FlagDefault::Int(10),
        }];
        let matches = bind_command(&specs)
            .try_get_matches_from(["frontend", "scaler"])
            .unwrap();
        assert_eq!(matches.get_one::<i64>("max"), Some(&10));
    }

    #[test]
    fn bind_command_collects_extra_positionals() {
        let matches = bind_command(&[])
            .try_get_matches_from(["a", "b", "c", "d"])
            .unwrap();
        let extra: Vec<_> = matches
            .get_many::<String>("extra")
            .unwrap()
            .map(String::as_str)
            .collect();
        assert_eq!(extra, vec!["c", "d"]);
    }

    #[test]
    fn bind_command_rejects_unknown_flags() {
        assert!(bind_command(&[])
            .try_get_matches_from(["frontend", "scaler", "--bogus=1"])
            .is_err());
    }
}
