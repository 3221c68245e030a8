use anyhow::Context;
use serde::Serialize;
use sunset_pipeline::dependents::resolve_dependents;
use sunset_pipeline::usage::{DependentUsage, usage_breakdown};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DependentsArgs;
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct UsageRow<'a> {
    id: &'a str,
    name: &'a str,
    kind: &'static str,
    impressions: Option<u64>,
    error: Option<&'a str>,
}

impl<'a> From<&'a DependentUsage> for UsageRow<'a> {
    fn from(usage: &'a DependentUsage) -> Self {
        Self {
            id: &usage.dependent.id,
            name: &usage.dependent.name,
            kind: usage.dependent.kind.as_str(),
            impressions: usage.impressions,
            error: usage.error.as_deref(),
        }
    }
}

/// Handle `sunset dependents`.
pub async fn handle(
    args: &DependentsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let scan = &ctx.config.scan;
    let window_days = args.days.unwrap_or(scan.lookback_days);

    let dependents = resolve_dependents(&ctx.client, &args.model_guid, scan.max_dependents)
        .await
        .with_context(|| format!("failed to resolve dependents of {}", args.model_guid))?;

    let breakdown = usage_breakdown(&ctx.client, dependents, window_days).await;
    let rows = breakdown.iter().map(UsageRow::from).collect::<Vec<_>>();
    output::output_with_rows(&breakdown, &rows, flags.format)
}
