use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => commands::scan::handle(&args, ctx, flags).await,
        Commands::Models => commands::models::handle(ctx, flags).await,
        Commands::Dependents(args) => commands::dependents::handle(&args, ctx, flags).await,
        Commands::Alerts(args) => commands::alerts::handle(&args, ctx, flags).await,
        Commands::Session => commands::session::handle(ctx, flags).await,
        Commands::Permissions(args) => commands::permissions::handle(&args, ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
