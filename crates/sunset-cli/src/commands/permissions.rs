use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ObjectArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `sunset permissions`. Read-only.
pub async fn handle(args: &ObjectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let guid = ctx.object_guid(args.guid.as_deref())?;
    let permissions = ctx
        .client
        .fetch_permissions(&guid)
        .await
        .with_context(|| format!("failed to fetch permissions for {guid}"))?;
    output::output(&permissions, flags.format)
}
