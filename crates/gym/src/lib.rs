#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Fraud detection gym
//!
//! An episodic environment for training a binary fraud classifier by
//! interaction instead of supervised loss minimisation. An external agent
//! submits one [`Action`] per step for the record under the cursor; the
//! environment scores it against the true label, updates the confusion
//! counters and moves on to the next record.
//!
//! ## Key Components
//!
//! -   [`FraudDetectionEnv`] owns the dataset, the per-episode
//!     [`EpisodeState`] and the cross-episode [`LifetimeStats`].
//! -   [`EnvConfig`] controls the turn limit, what a reset clears and how the
//!     [`StepInfo`] diagnostics are filled in. It can be read from JSON.
//! -   [`Env`] is the generic stepping interface a training loop drives.
//!
//! ## Usage
//!
//! ```rust
//! use dataset::LabelSequence;
//! use gym::{Action, Env, FraudDetectionEnv};
//!
//! let labels = LabelSequence::from_bits(&[0, 0, 1, 0, 1]).unwrap();
//! let mut env = FraudDetectionEnv::new(labels).unwrap();
//! assert_eq!(env.class_totals(), (2, 3));
//!
//! let t = env.step(Action::Fraud);
//! assert_eq!((t.observation, t.reward, t.done), (1, -1, false));
//! ```

mod config;
mod env;
mod episode;
mod error;
mod fraud;
mod info;
mod space;
mod stats;

pub use config::{EnvConfig, ResetPolicy, DEFAULT_TURNS_MAX};
pub use env::{Env, Transition};
pub use episode::EpisodeState;
pub use error::EnvError;
pub use fraud::FraudDetectionEnv;
pub use info::{InfoMode, StepInfo};
pub use space::{Action, Discrete};
pub use stats::{ClassTotals, ConfusionCounts, LifetimeStats};
