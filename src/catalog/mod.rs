//! catalog
//!
//! The trait catalog: every registered trait definition, decoded once per
//! invocation.
//!
//! # Design
//!
//! Catalog loading is best-effort per entry: a definition whose template
//! fails to decode is skipped with a warning so one bad trait never blocks
//! users of the others. Entries keep the decoded [`Template`] alongside the
//! definition's canonical name and workload applicability, which is
//! everything flag synthesis and name resolution need.
//!
//! [`Template`]: crate::core::template::Template

use crate::core::template::{self, Template};
use crate::core::types::TraitDefinition;
use crate::store::{ResourceStore, StoreError};
use crate::ui::output::{self, Verbosity};

/// One successfully decoded catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Canonical trait name (the definition's metadata name).
    pub name: String,

    /// Workload kinds the trait applies to. Empty means all.
    pub applies_to: Vec<String>,

    /// Decoded template.
    pub template: Template,
}

impl CatalogEntry {
    /// The trait's short alias, when the template declares one.
    pub fn short(&self) -> Option<&str> {
        self.template.short.as_deref()
    }

    /// Name shown in guidance output: the short alias, or the full name
    /// when no alias exists.
    pub fn display_name(&self) -> &str {
        self.short().unwrap_or(&self.name)
    }

    /// Whether this trait applies to the given workload kind.
    ///
    /// An empty applicability list means the trait applies to every
    /// workload; an unknown workload kind matches only those.
    pub fn applies_to_workload(&self, kind: Option<&str>) -> bool {
        if self.applies_to.is_empty() {
            return true;
        }
        match kind {
            Some(kind) => self.applies_to.iter().any(|k| k == kind),
            None => false,
        }
    }
}

/// The decoded, per-invocation view of all registered trait definitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitCatalog {
    entries: Vec<CatalogEntry>,
}

impl TraitCatalog {
    /// Load the catalog from the store.
    ///
    /// # Errors
    ///
    /// Fails only when listing the definitions fails; per-entry template
    /// decode failures are warnings.
    pub async fn load(
        store: &dyn ResourceStore,
        verbosity: Verbosity,
    ) -> Result<Self, StoreError> {
        let definitions = store.list_trait_definitions().await?;
        Ok(Self::from_definitions(definitions, verbosity))
    }

    /// Build a catalog from already-fetched definitions, skipping entries
    /// whose template does not decode.
    pub fn from_definitions(definitions: Vec<TraitDefinition>, verbosity: Verbosity) -> Self {
        let mut entries = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let template = match template::decode(definition.spec.extension.as_ref()) {
                Ok(template) => template,
                Err(err) => {
                    output::warn(
                        format!(
                            "extract template from trait definition {} hit an issue: {}, ignoring it",
                            definition.metadata.name, err
                        ),
                        verbosity,
                    );
                    continue;
                }
            };
            entries.push(CatalogEntry {
                name: definition.metadata.name,
                applies_to: definition.spec.applies_to_workloads,
                template,
            });
        }
        Self { entries }
    }

    /// All decoded entries, in server order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Resolve a user-entered trait name (canonical name or short alias,
    /// case-sensitive) to its catalog entry.
    pub fn resolve(&self, name_or_short: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name_or_short || e.short() == Some(name_or_short))
    }

    /// Entries applicable to the given workload kind.
    pub fn applicable_to(&self, workload_kind: Option<&str>) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.applies_to_workload(workload_kind))
            .collect()
    }
}
