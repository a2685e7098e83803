//! bind command - Attach a trait to a component
//!
//! Loads the trait catalog, synthesizes the per-invocation flag set,
//! resolves the component and trait, patches flag values into the trait
//! template's object, and persists the result by replacing the owning
//! application configuration's components list.

use clap::error::ErrorKind;
use clap::ArgMatches;
use serde_json::Value;

use crate::catalog::TraitCatalog;
use crate::cli::error::CliError;
use crate::cli::flags;
use crate::cli::Context;
use crate::core::fieldpath::Paved;
use crate::core::template::{self, ParameterKind, Template};
use crate::core::types::{AppConfigComponent, ComponentTrait};
use crate::store::rest::RestStore;
use crate::store::ResourceStore;
use crate::ui::output::{self, Verbosity};

/// Attach a trait to a component.
pub fn bind(ctx: &Context, args: &[String]) -> Result<(), CliError> {
    let store = RestStore::new(
        &ctx.env.api_base,
        &ctx.env.namespace,
        ctx.env.token.clone(),
    );
    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::store(e.to_string()))?;
    rt.block_on(bind_with_store(ctx.verbosity, &store, args))
}

/// Command body, driven against any store implementation.
pub async fn bind_with_store(
    verbosity: Verbosity,
    store: &dyn ResourceStore,
    args: &[String],
) -> Result<(), CliError> {
    // Catalog loading registers the dynamic flags, so it precedes parsing;
    // a malformed integer default aborts here, before any resolution.
    let catalog = TraitCatalog::load(store, verbosity)
        .await
        .map_err(|e| CliError::store(format!("Listing trait definitions hit an issue: {}", e)))?;
    let specs = flags::flag_specs(&catalog).map_err(|e| CliError::definition(e.to_string()))?;

    let matches = match flags::bind_command(&specs).try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            print!("{}", err);
            return Ok(());
        }
        Err(err) => return Err(CliError::usage(err.to_string())),
    };

    if matches.get_many::<String>("extra").is_some() {
        return Err(CliError::usage(
            "Unknown command is specified, please check and try again.",
        ));
    }

    let Some(component_name) = matches.get_one::<String>("component") else {
        return Err(CliError::usage(
            "please append the name of an application. Use `oam bind -h` for more detailed information",
        ));
    };

    let mut app_config = store
        .get_application_configuration(component_name)
        .await
        .map_err(|e| CliError::store(e.to_string()))?;

    let component = store
        .get_component(component_name)
        .await
        .map_err(|e| CliError::usage(format!("{}. Please choose an existed component name.", e)))?;

    let Some(trait_arg) = matches.get_one::<String>("trait") else {
        // Validation-only path: suggest applicable traits and stop.
        let names: Vec<&str> = catalog
            .applicable_to(component.workload_kind())
            .iter()
            .map(|e| e.display_name())
            .collect();
        return Err(CliError::usage(format!(
            "No trait specified.\nPlease choose a trait: {}",
            names.join(" ")
        )));
    };

    // Short aliases resolve through the catalog; a name the catalog does
    // not know may still be a canonical name whose template failed to
    // decode, so the definition fetch falls back to the literal argument.
    let not_valid =
        || CliError::usage(format!("trait name [{}] is not valid, please try again", trait_arg));
    let canonical = catalog
        .resolve(trait_arg)
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| trait_arg.clone());
    let definition = store
        .get_trait_definition(&canonical)
        .await
        .map_err(|_| not_valid())?;

    let template = template::decode(definition.spec.extension.as_ref())
        .map_err(|e| CliError::definition(format!("attaching the trait hit an issue: {}", e)))?;

    let trait_object = synthesize(&template, &matches, trait_arg)?;

    // Replace semantics: the mutated config carries exactly one component
    // with exactly one trait.
    app_config.spec.components = vec![AppConfigComponent {
        component_name: component_name.clone(),
        traits: vec![ComponentTrait {
            trait_: trait_object,
        }],
    }];

    output::print(
        format!("Applying trait for component {}", component_name),
        verbosity,
    );
    store
        .update_application_configuration(&app_config)
        .await
        .map_err(|e| CliError::store(format!("Applying trait hit an issue: {}", e)))?;
    output::success("Succeeded!", verbosity);
    Ok(())
}

/// Build the trait object: template skeleton + flag values + forced name.
fn synthesize(
    template: &Template,
    matches: &ArgMatches,
    trait_arg: &str,
) -> Result<Value, CliError> {
    let issue =
        |e: crate::core::fieldpath::PathError| {
            CliError::definition(format!("attaching the trait hit an issue: {}", e))
        };

    let mut paved = Paved::new(template.object.clone());
    for parameter in &template.parameters {
        match parameter.kind {
            ParameterKind::Int => {
                // Declared as an integer flag, written as a float; pinned
                // by a regression test.
                let value = matches
                    .try_get_one::<i64>(&parameter.name)
                    .ok()
                    .flatten()
                    .map(|v| *v as f64)
                    .unwrap_or_else(|| parameter.default.parse::<f64>().unwrap_or(0.0));
                for path in &parameter.field_paths {
                    paved.set_number(path, value).map_err(issue)?;
                }
            }
            ParameterKind::Str => {
                let value = matches
                    .try_get_one::<String>(&parameter.name)
                    .ok()
                    .flatten()
                    .cloned()
                    .unwrap_or_else(|| parameter.default.clone());
                for path in &parameter.field_paths {
                    paved.set_string(path, &value).map_err(issue)?;
                }
            }
        }
    }

    // metadata.name needs to be in lower case, whatever the parameters set.
    paved
        .set_string("metadata.name", &trait_arg.to_lowercase())
        .map_err(issue)?;
    Ok(paved.into_value())
}
