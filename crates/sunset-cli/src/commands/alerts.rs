use anyhow::Context;
use serde::Serialize;
use sunset_core::enums::AlertStatus;
use sunset_pipeline::alerts::inspect_alerts;
use sunset_pipeline::dependents::resolve_dependents;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AlertsArgs;
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct AlertCheck<'a> {
    model_id: &'a str,
    dependents: usize,
    alert_status: AlertStatus,
}

/// Handle `sunset alerts`.
pub async fn handle(args: &AlertsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dependents =
        resolve_dependents(&ctx.client, &args.model_guid, ctx.config.scan.max_dependents)
            .await
            .with_context(|| format!("failed to resolve dependents of {}", args.model_guid))?;

    let alert_status = inspect_alerts(&ctx.client, &dependents).await;
    output::output(
        &AlertCheck {
            model_id: &args.model_guid,
            dependents: dependents.len(),
            alert_status,
        },
        flags.format,
    )
}
