//! # fraudgym
//!
//! Entry point for the fraud detection environment runner.
//!
//! Loads a labeled CSV dataset, builds a [`gym::FraudDetectionEnv`] over it
//! and plays a number of episodes with a uniformly random agent. Useful as a
//! baseline and as a smoke test for new datasets.

use anyhow::Result;
use clap::Parser;
use fraudgym::app;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = app::Args::parse();
    let summary = app::run(&args)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
