//! CLI flag definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use siteforge_artifacts::{
    GenerationReport, read_url_manifest, write_key_file, write_outputs, write_report,
    write_url_manifest,
};
use siteforge_core::{current_dates, generate};
use siteforge_shared::{SiteConfig, load_config_from, write_config_template};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// siteforge — generate a static affiliate site from CSV + JSON config.
#[derive(Parser)]
#[command(
    name = "siteforge",
    version,
    about = "Generate a complete static affiliate website from a CSV of records.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Path to the site config JSON.
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Write a default-valued config JSON to this path and exit.
    #[arg(long)]
    pub write_config_template: Option<PathBuf>,

    /// Submit URLs from the existing indexnow-urls.txt manifest without
    /// regenerating any pages.
    #[arg(long)]
    pub indexnow_submit_existing: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "siteforge=info",
        1 => "siteforge=debug",
        _ => "siteforge=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    if let Some(template_path) = &cli.write_config_template {
        write_config_template(template_path)?;
        println!("Config template written: {}", template_path.display());
        return Ok(());
    }

    let config = match &cli.config_file {
        Some(path) => load_config_from(path)?,
        None => {
            info!("no --config-file given, using defaults");
            SiteConfig::default()
        }
    };

    if cli.indexnow_submit_existing {
        return cmd_submit_existing(&config).await;
    }

    cmd_generate(&config).await
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

async fn cmd_generate(config: &SiteConfig) -> Result<()> {
    let start = Instant::now();
    let output_root = PathBuf::from(&config.output);

    info!(
        input = %config.input,
        output = %config.output,
        site = %config.site_name,
        "starting generation"
    );

    let spinner = make_spinner();

    spinner.set_message("Generating pages");
    let dates = current_dates();
    let outcome = generate(config, &dates)?;

    spinner.set_message("Writing site files");
    write_outputs(&output_root, &outcome.outputs)?;
    write_key_file(&output_root, &config.indexnow.key)?;
    write_url_manifest(&output_root, &outcome.urls)?;

    let mut report = outcome.report;
    if config.indexnow.submit && !config.indexnow.key.trim().is_empty() {
        spinner.set_message("Submitting URLs to IndexNow");
        let submit = siteforge_indexnow::submit(config, &outcome.urls).await;
        print_submit_result(&submit);
        report.indexnow = Some(serde_json::to_value(&submit)?);
    }

    write_report(&output_root, &report)?;
    spinner.finish_and_clear();

    let article_count = report.counts.get("article").copied().unwrap_or(0);
    println!();
    println!("  Site generated successfully!");
    println!("  Articles: {article_count}");
    println!("  Files:    {}", report.count_total);
    println!("  Skipped:  {}", report.skipped_records.len());
    if !report.template_failures.is_empty() {
        println!("  Omitted:  {} (see generation_report.json)", report.template_failures.len());
    }
    println!("  Output:   {}", output_root.display());
    println!("  Time:     {:.1}s", start.elapsed().as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// IndexNow resubmission
// ---------------------------------------------------------------------------

async fn cmd_submit_existing(config: &SiteConfig) -> Result<()> {
    let output_root = PathBuf::from(&config.output);
    let urls = read_url_manifest(&output_root)?;
    if urls.is_empty() {
        return Err(eyre!(
            "IndexNow URL manifest not found or empty: {}",
            output_root.join("indexnow-urls.txt").display()
        ));
    }

    write_key_file(&output_root, &config.indexnow.key)?;

    info!(urls = urls.len(), "submitting existing URL manifest");
    let submit = siteforge_indexnow::submit(config, &urls).await;
    print_submit_result(&submit);

    update_report_indexnow(&output_root, &submit)?;
    Ok(())
}

/// Fold the submission summary into the existing generation report.
fn update_report_indexnow(
    output_root: &Path,
    submit: &siteforge_indexnow::SubmitOutcome,
) -> Result<()> {
    let report_path = output_root.join("generation_report.json");
    if !report_path.exists() {
        return Err(eyre!(
            "no generation_report.json at {} — generate the site first",
            output_root.display()
        ));
    }
    let content = std::fs::read_to_string(&report_path)?;
    let mut report: GenerationReport = serde_json::from_str(&content)?;
    report.indexnow = Some(serde_json::to_value(submit)?);
    write_report(output_root, &report)?;
    Ok(())
}

fn print_submit_result(submit: &siteforge_indexnow::SubmitOutcome) {
    if submit.submitted {
        println!("IndexNow submitted: {} URLs", submit.submitted_url_count);
    } else {
        println!(
            "IndexNow submit failed or partial. error={} status={}",
            submit.error, submit.last_status_code
        );
    }
}

// ---------------------------------------------------------------------------
// Progress spinner
// ---------------------------------------------------------------------------

fn make_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
