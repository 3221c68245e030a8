use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and report which models can be archived.
    Scan(ScanArgs),
    /// List every model in the catalog.
    Models,
    /// Impressions of each object built on one model.
    Dependents(DependentsArgs),
    /// Check the objects built on one model for alert definitions.
    Alerts(AlertsArgs),
    /// Show the user the session token belongs to.
    Session,
    /// Preview the permissions on one object.
    Permissions(ObjectArgs),
    /// Preview the TML export of one object.
    Export(ExportArgs),
    /// Print the JSON schema of an audit record.
    Schema(SchemaArgs),
}

/// Arguments for `sunset scan`. Unset values fall back to configuration.
#[derive(Clone, Debug, Default, Args)]
pub struct ScanArgs {
    /// Minimum model age in days
    #[arg(long)]
    pub days: Option<u32>,

    /// Impression lookback window in days
    #[arg(long)]
    pub lookback_days: Option<u32>,

    /// Impressions must stay strictly below this value
    #[arg(long = "imp-threshold")]
    pub imp_threshold: Option<u64>,

    /// Dependents fetched per model
    #[arg(long)]
    pub max_dependents: Option<u32>,

    /// Models evaluated concurrently
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Print only the models ready to archive
    #[arg(long)]
    pub ready_only: bool,
}

/// Arguments for `sunset dependents`.
#[derive(Clone, Debug, Args)]
pub struct DependentsArgs {
    pub model_guid: String,

    /// Impression lookback window in days (defaults to `scan.lookback_days`)
    #[arg(long)]
    pub days: Option<u32>,
}

/// Arguments for `sunset alerts`.
#[derive(Clone, Debug, Args)]
pub struct AlertsArgs {
    pub model_guid: String,
}

/// Arguments for `sunset permissions`.
#[derive(Clone, Debug, Args)]
pub struct ObjectArgs {
    /// Object GUID (defaults to `platform.sample_guid`)
    pub guid: Option<String>,
}

/// Arguments for `sunset export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Object GUID (defaults to `platform.sample_guid`)
    pub guid: Option<String>,

    /// Include associated objects in the export
    #[arg(long)]
    pub associated: bool,
}

/// Audit record types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    ArchiveCandidate,
    ScanReport,
}

/// Arguments for `sunset schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub kind: SchemaKind,
}
