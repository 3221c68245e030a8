use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sunset` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sunset",
    version,
    about = "Find ThoughtSpot models that are safe to archive"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Credentials file loaded before configuration (defaults to ./.env when present)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            env_file: self.env_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::root_commands::SchemaKind;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["sunset", "models"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.env_file.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sunset", "models", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Models));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sunset", "--format", "xml", "models"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn scan_overrides_parse() {
        let cli = Cli::try_parse_from([
            "sunset",
            "scan",
            "--days",
            "180",
            "--lookback-days",
            "30",
            "--imp-threshold",
            "5",
            "--max-dependents",
            "50",
            "--concurrency",
            "8",
            "--ready-only",
        ])
        .expect("cli should parse");

        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.days, Some(180));
        assert_eq!(args.lookback_days, Some(30));
        assert_eq!(args.imp_threshold, Some(5));
        assert_eq!(args.max_dependents, Some(50));
        assert_eq!(args.concurrency, Some(8));
        assert!(args.ready_only);
    }

    #[test]
    fn scan_without_flags_leaves_config_in_charge() {
        let cli = Cli::try_parse_from(["sunset", "scan"]).expect("cli should parse");
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert!(args.days.is_none());
        assert!(args.imp_threshold.is_none());
        assert!(!args.ready_only);
    }

    #[test]
    fn env_file_flag_is_global() {
        let cli = Cli::try_parse_from(["sunset", "session", "--env-file", "prod.env"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.env_file.as_deref(), Some(Path::new("prod.env")));
    }

    #[test]
    fn dependents_requires_a_model() {
        assert!(Cli::try_parse_from(["sunset", "dependents"]).is_err());
        let cli = Cli::try_parse_from(["sunset", "dependents", "m-1", "--days", "7"])
            .expect("cli should parse");
        let Commands::Dependents(args) = cli.command else {
            panic!("expected dependents");
        };
        assert_eq!(args.model_guid, "m-1");
        assert_eq!(args.days, Some(7));
    }

    #[test]
    fn schema_kinds_are_kebab_case() {
        let cli = Cli::try_parse_from(["sunset", "schema", "archive-candidate"])
            .expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.kind, SchemaKind::ArchiveCandidate);
        assert!(Cli::try_parse_from(["sunset", "schema", "nope"]).is_err());
    }
}
