use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kindred_core::{
    compare_faces_detailed, normalize, ComparisonReport, LandmarkDetector, LandmarkSet,
    ScoringConfig, Side, Tier,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

mod config;
mod landmark_file;

use config::Config;
use landmark_file::{JsonFileDetector, LandmarkFileError};

#[derive(Parser)]
#[command(name = "kindred", about = "Kindred facial-landmark chemistry scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two landmark files and print the chemistry result
    Compare {
        /// Landmark JSON for the first face
        first: PathBuf,
        /// Landmark JSON for the second face
        second: PathBuf,
        /// Fixed RNG seed (overrides KINDRED_SEED)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the score breakdown alongside the result
        #[arg(long)]
        explain: bool,
    },
    /// Show the narrative tier for a score
    Tier {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=99))]
        score: u8,
    },
    /// Print the normalized form of a landmark file
    Normalize {
        file: PathBuf,
    },
    /// Print the effective scoring configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            seed,
            explain,
        } => {
            let config = Config::load()?;
            let report = run_compare(first, second, &config.scoring, seed.or(config.seed)).await?;

            tracing::info!(
                score = report.result.score,
                tier = report.result.tier.number(),
                "comparison complete"
            );

            let json = if explain {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string_pretty(&report.result)?
            };
            println!("{json}");
        }
        Commands::Tier { score } => {
            let tier = Tier::from_score(score);
            println!(
                "{}",
                serde_json::json!({
                    "score": score,
                    "tier": tier.number(),
                    "label": tier.label(),
                })
            );
        }
        Commands::Normalize { file } => {
            let set = load_required(&file)?;
            let normalized = normalize(&set)
                .with_context(|| format!("cannot normalize {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(normalized.points())?);
        }
        Commands::Config => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config.scoring)?);
        }
    }

    Ok(())
}

/// Load both landmark files concurrently and compare them.
///
/// Only a file that explicitly holds no face takes the fallback path; missing,
/// unreadable or unparseable files are errors.
async fn run_compare(
    first: PathBuf,
    second: PathBuf,
    scoring: &ScoringConfig,
    seed: Option<u64>,
) -> Result<ComparisonReport> {
    let (a, b) = tokio::join!(detect(first), detect(second));
    let a = a.context("cannot load first landmark file")?;
    let b = b.context("cannot load second landmark file")?;
    if a.is_none() {
        tracing::debug!(side = %Side::First, "no face in landmark file");
    }
    if b.is_none() {
        tracing::debug!(side = %Side::Second, "no face in landmark file");
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    compare_faces_detailed(a.as_ref(), b.as_ref(), scoring, &mut rng)
        .context("face comparison failed")
}

/// Run the file detector off the async runtime so both inputs load concurrently.
async fn detect(path: PathBuf) -> Result<Option<LandmarkSet>, LandmarkFileError> {
    let display = path.display().to_string();
    tokio::task::spawn_blocking(move || JsonFileDetector.detect_landmarks(&path))
        .await
        .map_err(|e| LandmarkFileError::Io {
            path: display,
            source: std::io::Error::other(e),
        })?
}

fn load_required(path: &Path) -> Result<LandmarkSet> {
    JsonFileDetector
        .detect_landmarks(path)?
        .with_context(|| format!("{} contains no face", path.display()))
}
