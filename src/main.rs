use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::{ArgGroup, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod classifier;
mod config;
mod error;
mod models;
mod outreach;
mod pipeline;
mod post;
mod recommend;
mod relevance;
mod report;
mod store;

use config::AnalysisConfig;
use error::IntelError;
use models::{PostFeatures, ProfileRecord};

#[derive(Parser)]
#[command(name = "linkedin-audience-intel")]
#[command(about = "Score LinkedIn audiences against an ICP and grade posts")]
#[command(long_about = None)]
struct Cli {
    /// JSON file overriding the built-in dictionaries and ICP targets
    #[arg(long, global = true, env = "LINKEDIN_INTEL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a post and an audience, then write the combined report and prospect list
    Run {
        #[arg(long)]
        audience: PathBuf,
        #[arg(long)]
        post: Option<PathBuf>,
        #[arg(long)]
        post_url: Option<String>,
        #[arg(long, default_value_t = outreach::DEFAULT_MIN_SCORE)]
        min_score: i32,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Classify and score an audience export
    Audience {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Extract features from a single post and predict its performance
    #[command(group(
        ArgGroup::new("source")
            .args(["file", "text"])
            .required(true)
            .multiple(false)
    ))]
    Post {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the effective dictionaries and ICP configuration as JSON
    Dictionaries {
        #[arg(long, default_value = "dictionaries.json")]
        out: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration override");
            store::load_config(path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn analyze_audience(
    config: &AnalysisConfig,
    csv: &Path,
    out: &Path,
) -> anyhow::Result<Vec<ProfileRecord>> {
    let input = store::read_profiles(csv)
        .with_context(|| format!("failed to read audience data from {}", csv.display()))?;
    let outcome = pipeline::process_rows(config, &input.rows);
    store::write_profiles(out, &outcome.records)
        .with_context(|| format!("failed to write {}", out.display()))?;

    println!("Processed {} profiles", outcome.records.len());
    println!("Excluded: {}", outcome.excluded_count());
    println!(
        "High-value (>={}): {}",
        report::HIGH_VALUE_SCORE,
        outcome.high_value_count(report::HIGH_VALUE_SCORE)
    );
    if !input.skipped.is_empty() {
        println!("Skipped malformed rows: {}", input.skipped.len());
    }
    if outcome.noise_rows > 0 {
        info!(rows = outcome.noise_rows, "ignored follower-count rows");
    }
    println!("Output: {}", out.display());

    Ok(outcome.records)
}

fn analyze_post(config: &AnalysisConfig, text: &str, out: &Path) -> anyhow::Result<PostFeatures> {
    let features = post::extract_features(text, &config.post);
    print!("{}", report::build_post_report(text, &features));
    store::write_post_features(out, &features)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Analysis saved: {}", out.display());
    Ok(features)
}

fn export_prospects(records: &[ProfileRecord], min_score: i32, out: &Path) -> anyhow::Result<()> {
    let prospects = match outreach::select_prospects(records, min_score) {
        Ok(prospects) => prospects,
        Err(err @ IntelError::NoProspects { .. }) => {
            info!(min_score, "prospect export skipped");
            println!("{}", capitalize(&err.to_string()));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    store::write_prospects(out, &prospects)
        .with_context(|| format!("failed to write {}", out.display()))?;
    let counts = outreach::priority_counts(&prospects);
    println!("Exported {} prospects: {}", prospects.len(), out.display());
    println!("  HIGH priority: {}", counts.high);
    println!("  MEDIUM priority: {}", counts.medium);
    println!("  LOW priority: {}", counts.low);
    Ok(())
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            audience,
            post,
            post_url,
            min_score,
            out_dir,
        } => {
            let stamp = timestamp();
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;

            let features = match post {
                Some(path) => {
                    let text = store::read_post_text(&path).with_context(|| {
                        format!("failed to read post text from {}", path.display())
                    })?;
                    println!("Loaded post text: {}", path.display());
                    let out = out_dir.join(format!("post_performance_analysis_{stamp}.json"));
                    Some(analyze_post(&config, &text, &out)?)
                }
                None => None,
            };

            let records = analyze_audience(
                &config,
                &audience,
                &out_dir.join(format!("audience_intelligence_{stamp}.csv")),
            )?;

            let report_path = out_dir.join(format!("linkedin_intelligence_report_{stamp}.txt"));
            let combined = report::build_report(&report::ReportInput {
                generated_at: Local::now().naive_local(),
                post_url: post_url.as_deref(),
                post: features.as_ref(),
                audience: Some(records.as_slice()),
            });
            std::fs::write(&report_path, combined)
                .with_context(|| format!("failed to write {}", report_path.display()))?;
            println!("Combined report saved: {}", report_path.display());

            export_prospects(
                &records,
                min_score,
                &out_dir.join(format!("high_value_prospects_{stamp}.csv")),
            )?;
            println!("Analysis complete");
        }
        Commands::Audience { csv, out } => {
            let out = out.unwrap_or_else(|| PathBuf::from("audience_intelligence_output.csv"));
            analyze_audience(&config, &csv, &out)?;
        }
        Commands::Post { file, text, out } => {
            let text = match file {
                Some(path) => store::read_post_text(&path)
                    .with_context(|| format!("failed to read post text from {}", path.display()))?,
                None => text.unwrap_or_default(),
            };
            let out = out.unwrap_or_else(|| PathBuf::from("post_performance_analysis.json"));
            analyze_post(&config, &text, &out)?;
        }
        Commands::Dictionaries { out } => {
            store::write_config(&out, &config)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Dictionaries written to {}.", out.display());
        }
    }

    Ok(())
}
