//! # Runner logic
//!
//! Command-line arguments and the episode loop. Flags given on the command
//! line override whatever the optional JSON config file sets.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dataset::{ColumnarDataset, Dataset, DEFAULT_LABEL_COLUMN};
use gym::{ConfusionCounts, Env, EnvConfig, FraudDetectionEnv, InfoMode};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// CSV file with a header row and a binary label column.
    #[arg(long)]
    pub dataset: PathBuf,

    /// Name of the label column.
    #[arg(long, default_value = DEFAULT_LABEL_COLUMN)]
    pub label_column: String,

    /// Number of episodes to play.
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,

    /// Seed for the agent's random actions. Drawn at random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with an environment config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub turns_max: Option<usize>,

    /// Start every episode at the first row.
    #[arg(long)]
    pub rewind_cursor: bool,

    /// Clear the confusion counters on every reset.
    #[arg(long)]
    pub clear_stats: bool,

    /// Report true negatives in the `true_negative_rate` info slot.
    #[arg(long)]
    pub corrected_info: bool,
}

impl Args {
    fn env_config(&self) -> Result<EnvConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                EnvConfig::from_json(&json)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => EnvConfig::default(),
        };
        if let Some(turns_max) = self.turns_max {
            config.turns_max = turns_max;
        }
        config.reset.rewind_cursor |= self.rewind_cursor;
        config.reset.clear_stats |= self.clear_stats;
        if self.corrected_info {
            config.info_mode = InfoMode::Corrected;
        }
        Ok(config)
    }
}

#[derive(Serialize, Debug)]
pub struct EpisodeSummary {
    pub turns: usize,
    pub episode_return: i64,
    pub final_row: usize,
}

#[derive(Serialize, Debug)]
pub struct RunSummary {
    pub seed: u64,
    pub rows: usize,
    pub fraud_rows: usize,
    pub not_fraud_rows: usize,
    pub episodes: Vec<EpisodeSummary>,
    pub confusion: ConfusionCounts,
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
}

/// Load the dataset named in `args` and play `args.episodes` random episodes.
///
/// # Errors
///
/// Returns an error if the config or dataset cannot be read, or if the
/// dataset has no rows.
pub fn run(args: &Args) -> Result<RunSummary> {
    let config = args.env_config()?;
    let dataset = ColumnarDataset::from_csv_path(&args.dataset, &args.label_column)
        .with_context(|| format!("loading dataset {}", args.dataset.display()))?;
    let env = FraudDetectionEnv::with_config(dataset, config)?;
    Ok(play(env, args.seed, args.episodes))
}

/// Play `episodes` episodes with uniformly random actions.
pub fn play<D: Dataset>(mut env: FraudDetectionEnv<D>, seed: Option<u64>, episodes: usize) -> RunSummary {
    let seed = env.seed(seed)[0];
    let mut summaries = Vec::with_capacity(episodes);

    for episode in 0..episodes {
        env.reset();
        loop {
            let action = env.sample_action();
            let t = env.step(action);
            if t.done {
                break;
            }
        }
        let state = env.episode();
        let counts = env.confusion();
        tracing::info!(
            "Episode {} finished: {} turns, return {}, row {}, tp/tn/fp/fn = {}/{}/{}/{}",
            episode + 1,
            state.turn_count,
            state.episode_return,
            state.cursor,
            counts.true_positive,
            counts.true_negative,
            counts.false_positive,
            counts.false_negative
        );
        summaries.push(EpisodeSummary {
            turns: state.turn_count,
            episode_return: state.episode_return,
            final_row: state.cursor,
        });
    }

    let (fraud_rows, not_fraud_rows) = env.class_totals();
    let confusion = env.confusion();
    RunSummary {
        seed,
        rows: env.obs_size(),
        fraud_rows,
        not_fraud_rows,
        episodes: summaries,
        confusion,
        accuracy: confusion.accuracy(),
        precision: confusion.precision(),
        recall: confusion.recall(),
    }
}
