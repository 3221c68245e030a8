use schemars::schema_for;
use sunset_core::entities::ArchiveCandidate;
use sunset_core::report::ScanReport;

use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `sunset schema`. Always JSON; `--format raw` prints it on one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.kind)?;
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

fn schema_value(kind: SchemaKind) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        SchemaKind::ArchiveCandidate => schema_for!(ArchiveCandidate),
        SchemaKind::ScanReport => schema_for!(ScanReport),
    };
    Ok(serde_json::to_value(schema)?)
}
