use anyhow::Context;
use serde::Serialize;
use sunset_client::TmlArtifact;
use sunset_pipeline::alerts::is_alert_artifact;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct ArtifactRow<'a> {
    artifact: &'a str,
    alert: bool,
    bytes: usize,
}

impl<'a> From<&'a TmlArtifact> for ArtifactRow<'a> {
    fn from(artifact: &'a TmlArtifact) -> Self {
        Self {
            artifact: &artifact.artifact_name,
            alert: is_alert_artifact(&artifact.artifact_name),
            bytes: artifact.content.len(),
        }
    }
}

/// Handle `sunset export`. Read-only: nothing is written to the platform.
pub async fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let guid = ctx.object_guid(args.guid.as_deref())?;
    let artifacts = ctx
        .client
        .export_definition(&guid, args.associated)
        .await
        .with_context(|| format!("failed to export {guid}"))?;

    let rows = artifacts.iter().map(ArtifactRow::from).collect::<Vec<_>>();
    output::output_with_rows(&artifacts, &rows, flags.format)
}
