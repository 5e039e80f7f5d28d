mod analyze;
mod cli;
mod config;
mod error;
mod extract;
mod report;
mod store;
mod types;

use crate::error::{GreenscanError, Result};
use crate::store::{AnalysisRecord, AnalysisStore};
use crate::types::config::GreenscanConfig;
use crate::types::report::PageReport;
use crate::types::snapshot::PageSnapshot;
use chrono::Utc;
use clap::Parser;
use std::path::Path;

#[allow(dead_code)]
pub mod exit_code {
    pub const GOOD: i32 = 0;
    pub const AVERAGE: i32 = 1;
    pub const POOR: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let html = read_document(&cmd.path)?;
            let snapshot = extract::snapshot_from_html(&html);
            report_snapshot(&cmd.path, &snapshot, cmd.format)
        }
        cli::Commands::Score(cmd) => {
            let raw = read_document(&cmd.path)?;
            let snapshot: PageSnapshot = serde_json::from_str(&raw).map_err(|e| {
                GreenscanError::SnapshotParse(format!("{}: {}", cmd.path.display(), e))
            })?;
            report_snapshot(&cmd.path, &snapshot, cmd.format)
        }
        cli::Commands::Batch(cmd) => run_batch(&cmd),
        cli::Commands::Badge(cmd) => {
            // A page whose snapshot cannot be obtained reports "unknown";
            // that is a caller-side fallback, not a scorer error.
            let rating = std::fs::read_to_string(&cmd.path)
                .ok()
                .map(|html| analyze::analyze(&extract::snapshot_from_html(&html)).rating);
            let badge = report::badge::badge_for(rating);
            println!("{} {} {}", badge.glyph, badge.color, badge.label);
            Ok(exit_code::GOOD)
        }
        cli::Commands::Criteria => {
            print_criteria();
            Ok(exit_code::GOOD)
        }
    }
}

fn report_snapshot(
    path: &Path,
    snapshot: &PageSnapshot,
    format: Option<cli::ReportFormat>,
) -> Result<i32> {
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let config = config::load_config(root)?;
    let analysis = analyze::analyze(snapshot);
    let page_report = PageReport {
        source: path.display().to_string(),
        analyzed_at: Utc::now(),
        recommendations: analyze::advice::recommendations(&analysis.details),
        analysis,
    };

    let rendered = report::render(&page_report, output_format(format, config.as_ref()))?;
    println!("{rendered}");
    Ok(analysis.rating.exit_code())
}

fn run_batch(cmd: &cli::BatchCommand) -> Result<i32> {
    if !cmd.path.exists() {
        return Err(GreenscanError::PathNotFound(cmd.path.display().to_string()));
    }
    if !cmd.path.is_dir() {
        return Err(GreenscanError::NotADirectory(cmd.path.display().to_string()));
    }

    let config = config::load_config(&cmd.path)?;
    let batch = config
        .as_ref()
        .map(GreenscanConfig::batch)
        .unwrap_or_default();

    let mut store = AnalysisStore::new();
    let mut worst = exit_code::GOOD;
    let mut lines = Vec::new();

    let walker = walkdir::WalkDir::new(&cmd.path)
        .follow_links(batch.follow_symlinks)
        .sort_by_file_name();
    for entry in walker.into_iter().filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() || !matches_extension(entry.path(), &batch.extensions) {
            continue;
        }
        let html = match std::fs::read_to_string(entry.path()) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "skipping unreadable document");
                continue;
            }
        };

        let key = AnalysisStore::key_for(html.as_bytes());
        let analysis = match store.get(&key) {
            Some(record) => {
                tracing::info!(
                    path = %entry.path().display(),
                    duplicate_of = %record.source,
                    "reusing result for identical content"
                );
                record.analysis
            }
            None => {
                let analysis = analyze::analyze(&extract::snapshot_from_html(&html));
                store.insert(
                    key.clone(),
                    AnalysisRecord {
                        source: entry.path().display().to_string(),
                        content_sha256: key,
                        analysis,
                        analyzed_at: Utc::now(),
                    },
                );
                analysis
            }
        };

        let badge = report::badge::badge_for(Some(analysis.rating));
        lines.push(format!(
            "{} {:>3}% {:<7} {}",
            badge.glyph,
            analysis.score,
            analysis.rating,
            entry.path().display()
        ));
        worst = worst.max(analysis.rating.exit_code());
    }

    if store.is_empty() {
        println!("batch: no documents found");
        return Ok(exit_code::GOOD);
    }

    match output_format(cmd.format.clone(), config.as_ref()) {
        report::OutputFormat::Json => {
            let records: Vec<&AnalysisRecord> = store.records().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        report::OutputFormat::Md => {
            for line in &lines {
                println!("{line}");
            }
            println!("\n{} document(s), {} unique", lines.len(), store.len());
        }
    }

    Ok(worst)
}

fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GreenscanError::PathNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(GreenscanError::NotAFile(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            extensions
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(extension))
        })
        .unwrap_or(false)
}

fn output_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&GreenscanConfig>,
) -> report::OutputFormat {
    if let Some(format) = flag {
        return match format {
            cli::ReportFormat::Json => report::OutputFormat::Json,
            cli::ReportFormat::Md => report::OutputFormat::Md,
        };
    }
    match config
        .and_then(|cfg| cfg.report.as_ref())
        .and_then(|report| report.format.as_deref())
    {
        Some("json") => report::OutputFormat::Json,
        _ => report::OutputFormat::Md,
    }
}

fn print_criteria() {
    println!("criteria (each worth {} points):", analyze::POINTS_PER_CRITERION);
    println!("- imageOptimization: over half of images use .webp/.avif or lazy loading");
    println!("- minifiedResources: over 30% of external scripts and stylesheets are minified");
    println!("- compressionEnabled: a meta tag hints at transfer compression");
    println!("- reducedRequests: fewer than 20 script, stylesheet and image elements");
    println!("- energyEfficientDesign: dark-mode support, or most scripts load async/defer");
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
