use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use sunset_config::ScanConfig;
use sunset_core::entities::ArchiveCandidate;
use sunset_core::params::ScanParameters;
use sunset_core::report::ScanReport;
use sunset_pipeline::Scanner;
use sunset_pipeline::scanner::ModelOutcome;

use crate::cli::root_commands::ScanArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;
use crate::progress::Progress;

/// One line of the scan table.
#[derive(Debug, Serialize)]
struct CandidateRow<'a> {
    id: &'a str,
    name: &'a str,
    author: Option<&'a str>,
    age_days: Option<i64>,
    dependents: usize,
    impressions: u64,
    failed_queries: u32,
    alerts: &'static str,
    decision: &'static str,
}

impl<'a> From<&'a ArchiveCandidate> for CandidateRow<'a> {
    fn from(candidate: &'a ArchiveCandidate) -> Self {
        Self {
            id: &candidate.model.id,
            name: &candidate.model.name,
            author: candidate.model.author_name.as_deref(),
            age_days: candidate.age_days,
            dependents: candidate.dependent_count(),
            impressions: candidate.total_impressions.impression_count,
            failed_queries: candidate.total_impressions.per_dependent_failures,
            alerts: candidate.alert_status.as_str(),
            decision: if candidate.decision { "ready" } else { "keep" },
        }
    }
}

/// Handle `sunset scan`.
pub async fn handle(args: &ScanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = scan_parameters(&ctx.config.scan, args)?;
    tracing::info!(?params, "starting scan");

    let progress = Progress::spinner("evaluating models");
    let scanner = Scanner::new(&ctx.client, params).with_observer(|outcome| {
        progress.inc(1);
        if let ModelOutcome::Evaluated(candidate) = outcome {
            progress.set_message(&candidate.model.name);
        }
    });

    let report = match scanner.run(Utc::now()).await {
        Ok(report) => {
            progress.finish_clear();
            report
        }
        Err(error) => {
            progress.finish_err("scan failed");
            return Err(error).context("scan aborted");
        }
    };

    if args.ready_only {
        let ready: Vec<&ArchiveCandidate> = report.ready().collect();
        let rows: Vec<CandidateRow<'_>> = ready.iter().copied().map(CandidateRow::from).collect();
        output::output_with_rows(&ready, &rows, flags.format)?;
    } else {
        let rows: Vec<CandidateRow<'_>> = report.evaluated.iter().map(CandidateRow::from).collect();
        output::output_with_rows(&report, &rows, flags.format)?;
    }

    if flags.format == OutputFormat::Table && !flags.quiet {
        eprintln!("{}", summary(&report));
    }
    Ok(())
}

/// Merge command-line overrides into the configured scan settings.
fn scan_parameters(config: &ScanConfig, args: &ScanArgs) -> anyhow::Result<ScanParameters> {
    let mut scan = config.clone();
    if let Some(days) = args.days {
        scan.min_age_days = days;
    }
    if let Some(days) = args.lookback_days {
        scan.lookback_days = days;
    }
    if let Some(threshold) = args.imp_threshold {
        scan.impression_threshold = threshold;
    }
    if let Some(max) = args.max_dependents {
        scan.max_dependents = max;
    }
    if let Some(concurrency) = args.concurrency {
        scan.concurrency = concurrency;
    }
    scan.to_parameters().context("invalid scan parameters")
}

fn summary(report: &ScanReport) -> String {
    let mut line = format!(
        "{} models in catalog, {} too recent, {} evaluated, {} ready to archive",
        report.catalog_size,
        report.too_recent,
        report.evaluated.len(),
        report.ready_count(),
    );
    if !report.failures.is_empty() {
        line.push_str(&format!(", {} skipped after errors:", report.failures.len()));
        for failure in &report.failures {
            line.push_str(&format!("\n  {} ({}): {}", failure.model.name, failure.model.id, failure.reason));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use sunset_config::ScanConfig;
    use sunset_core::entities::ModelAsset;
    use sunset_core::report::{ModelFailure, ScanReport};

    use super::{scan_parameters, summary};
    use crate::cli::root_commands::ScanArgs;

    #[test]
    fn config_values_apply_without_flags() {
        let params = scan_parameters(&ScanConfig::default(), &ScanArgs::default()).expect("valid");
        assert_eq!(params.min_age_days, 90);
        assert_eq!(params.lookback_days, 90);
        assert_eq!(params.impression_threshold, 1);
        assert_eq!(params.max_dependents, 1000);
        assert_eq!(params.concurrency, 4);
    }

    #[test]
    fn flags_override_config() {
        let args = ScanArgs {
            days: Some(180),
            imp_threshold: Some(10),
            concurrency: Some(1),
            ..ScanArgs::default()
        };
        let params = scan_parameters(&ScanConfig::default(), &args).expect("valid");
        assert_eq!(params.min_age_days, 180);
        assert_eq!(params.impression_threshold, 10);
        assert_eq!(params.concurrency, 1);
        assert_eq!(params.lookback_days, 90);
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let args = ScanArgs {
            concurrency: Some(0),
            ..ScanArgs::default()
        };
        assert!(scan_parameters(&ScanConfig::default(), &args).is_err());
    }

    #[test]
    fn summary_lists_failures() {
        let report = ScanReport {
            parameters: scan_parameters(&ScanConfig::default(), &ScanArgs::default()).expect("valid"),
            generated_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            catalog_size: 3,
            too_recent: 1,
            evaluated: Vec::new(),
            failures: vec![ModelFailure {
                model: ModelAsset {
                    id: "m-9".into(),
                    name: "Legacy".into(),
                    author_name: None,
                    created_at: None,
                },
                reason: "HTTP 500".into(),
            }],
        };
        let text = summary(&report);
        assert!(text.starts_with("3 models in catalog, 1 too recent, 0 evaluated, 0 ready to archive"));
        assert!(text.contains("Legacy (m-9): HTTP 500"));
    }
}
