use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

/// Handle `sunset session`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx
        .client
        .session_user()
        .await
        .context("failed to read session user")?;
    output::output(&user, flags.format)
}
