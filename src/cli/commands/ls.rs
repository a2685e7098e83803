//! ls command - List applications
//!
//! Queries application summaries and renders them as a fixed-column
//! table. A store failure prints an error line and yields no table; the
//! exit code stays zero on that path.

use chrono::{DateTime, Utc};

use crate::apps;
use crate::cli::error::CliError;
use crate::cli::Context;
use crate::core::types::ApplicationMeta;
use crate::store::rest::RestStore;
use crate::store::ResourceStore;
use crate::ui::output::{self, Table};

/// List applications with workloads, traits, status and created time.
pub fn ls(ctx: &Context, app: Option<&str>) -> Result<(), CliError> {
    let store = RestStore::new(
        &ctx.env.api_base,
        &ctx.env.namespace,
        ctx.env.token.clone(),
    );
    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::store(e.to_string()))?;
    rt.block_on(ls_with_store(&store, app))
}

/// Command body, driven against any store implementation.
pub async fn ls_with_store(
    store: &dyn ResourceStore,
    app: Option<&str>,
) -> Result<(), CliError> {
    let metas = match apps::applications(store, app).await {
        Ok(metas) => metas,
        Err(err) => {
            output::error(format!("listing applications hit an issue: {}", err));
            return Ok(());
        }
    };
    print!("{}", render_table(&metas));
    Ok(())
}

/// Render the summary table. Zero applications still yield the header row.
pub fn render_table(metas: &[ApplicationMeta]) -> String {
    let mut table = Table::new();
    table.add_row(["NAME", "WORKLOAD", "TRAITS", "STATUS", "CREATED-TIME"]);
    for meta in metas {
        table.add_row([
            meta.name.clone(),
            meta.workload.clone(),
            meta.traits.join(","),
            meta.status.clone(),
            meta.created.map(format_time).unwrap_or_default(),
        ]);
    }
    table.to_string()
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn header_only_when_no_applications() {
        assert_eq!(
            render_table(&[]),
            "NAME  WORKLOAD  TRAITS  STATUS  CREATED-TIME\n"
        );
    }

    #[test]
    fn traits_join_with_commas() {
        let metas = vec![ApplicationMeta {
            name: "frontend".to_string(),
            workload: "ContainerizedWorkload".to_string(),
            traits: vec!["scaler".to_string(), "rollout".to_string()],
            status: "Running".to_string(),
            created: Some(Utc.with_ymd_and_hms(2020, 7, 20, 10, 30, 0).unwrap()),
        }];
        let rendered = render_table(&metas);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("scaler,rollout"));
        assert!(lines[1].contains("2020-07-20 10:30:00"));
    }
}
