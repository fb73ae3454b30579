use dataset::{Dataset, Label};

use crate::{
    Action, ClassTotals, ConfusionCounts, Discrete, Env, EnvConfig, EnvError, EpisodeState,
    LifetimeStats, StepInfo, Transition,
};

/// Environment in which an agent labels dataset rows as fraud or not fraud.
///
/// Each step scores the agent's prediction for the row under the cursor
/// (+1 when it matches the label, -1 otherwise), records the outcome in the
/// confusion counters and moves the cursor to the next row. An episode ends
/// once the turn count exceeds [`EnvConfig::turns_max`] or the cursor reaches
/// the last row. The cursor never moves past the last row, so after that
/// point every step ends the episode again.
#[derive(Debug)]
pub struct FraudDetectionEnv<D> {
    dataset: D,
    config: EnvConfig,
    observation_space: Discrete,
    episode: EpisodeState,
    lifetime: LifetimeStats,
    rng: fastrand::Rng,
    seed: u64,
}

impl<D: Dataset> FraudDetectionEnv<D> {
    /// Creates an environment with the default [`EnvConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EmptyDataset`] if the dataset has no rows.
    pub fn new(dataset: D) -> Result<Self, EnvError> {
        Self::with_config(dataset, EnvConfig::default())
    }

    /// Creates an environment and tallies the class totals with one pass over
    /// the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EmptyDataset`] if the dataset has no rows.
    pub fn with_config(dataset: D, config: EnvConfig) -> Result<Self, EnvError> {
        let rows = dataset.row_count();
        if rows == 0 {
            return Err(EnvError::EmptyDataset);
        }
        let (positives, negatives) = dataset.count_labels();
        tracing::info!(
            "Fraud detection env over {} rows ({} fraud, {} not fraud), turns_max = {}",
            rows,
            positives,
            negatives,
            config.turns_max
        );

        let seed = fastrand::u64(..);
        Ok(Self {
            dataset,
            config,
            observation_space: Discrete::new(rows),
            episode: EpisodeState::default(),
            lifetime: LifetimeStats {
                confusion: ConfusionCounts::default(),
                class_totals: ClassTotals { positives, negatives },
            },
            rng: fastrand::Rng::with_seed(seed),
            seed,
        })
    }

    /// Steps with a raw action index, as handed over by a generic harness.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] if `action` is not in the action
    /// space. The environment is left untouched in that case.
    pub fn step_index(&mut self, action: usize) -> Result<Transition<usize, StepInfo>, EnvError> {
        let action = Action::try_from(action)?;
        Ok(self.step(action))
    }

    /// Reseeds the environment's random generator, drawing a fresh seed when
    /// `seed` is `None`. Returns the seed actually used.
    pub fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        let seed = seed.unwrap_or_else(|| fastrand::u64(..));
        self.rng = fastrand::Rng::with_seed(seed);
        self.seed = seed;
        tracing::info!("Seeded environment rng with {}", seed);
        vec![seed]
    }

    /// Draws a uniformly random action from the environment's own generator.
    pub fn sample_action(&mut self) -> Action {
        if self.rng.bool() {
            Action::Fraud
        } else {
            Action::NotFraud
        }
    }

    /// `(fraud, not_fraud)` row counts computed at construction.
    #[must_use]
    pub fn class_totals(&self) -> (usize, usize) {
        let totals = self.lifetime.class_totals;
        (totals.positives, totals.negatives)
    }

    #[must_use]
    pub fn confusion(&self) -> ConfusionCounts {
        self.lifetime.confusion
    }

    #[must_use]
    pub fn lifetime(&self) -> &LifetimeStats {
        &self.lifetime
    }

    #[must_use]
    pub fn episode(&self) -> &EpisodeState {
        &self.episode
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.episode.cursor
    }

    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.episode.turn_count
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.episode.episode_over
    }

    #[must_use]
    pub fn current_label(&self) -> Label {
        self.dataset.label_at(self.episode.cursor)
    }

    #[must_use]
    pub fn action_space(&self) -> Discrete {
        Action::SPACE
    }

    #[must_use]
    pub fn observation_space(&self) -> Discrete {
        self.observation_space
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    fn last_row(&self) -> usize {
        self.observation_space.n - 1
    }

    fn score(&mut self, action: Action, label: Label) -> i32 {
        let counts = &mut self.lifetime.confusion;
        match (action, label) {
            (Action::Fraud, Label::Fraud) => {
                counts.true_positive += 1;
                1
            }
            (Action::Fraud, Label::NotFraud) => {
                counts.false_positive += 1;
                -1
            }
            (Action::NotFraud, Label::NotFraud) => {
                counts.true_negative += 1;
                1
            }
            (Action::NotFraud, Label::Fraud) => {
                counts.false_negative += 1;
                -1
            }
        }
    }
}

impl<D: Dataset> Env for FraudDetectionEnv<D> {
    type Action = Action;
    type Observation = usize;
    type Info = StepInfo;

    fn step(&mut self, action: Action) -> Transition<usize, StepInfo> {
        let cursor = self.episode.cursor;
        let label = self.dataset.label_at(cursor);
        let reward = self.score(action, label);

        let last_row = self.last_row();
        if cursor < last_row {
            self.episode.cursor += 1;
        }
        self.episode.turn_count += 1;
        self.episode.episode_return += i64::from(reward);

        tracing::debug!(
            "turn {} row {}: predicted {}, label {:?}, reward {}",
            self.episode.turn_count,
            cursor,
            action,
            label,
            reward
        );

        let turn_limit = self.episode.turn_count > self.config.turns_max;
        let at_last_row = self.episode.cursor == last_row;
        if turn_limit || at_last_row {
            if !self.episode.episode_over {
                tracing::info!(
                    "Episode over after {} turns at row {} (turn limit: {}, last row: {}), return {}",
                    self.episode.turn_count,
                    self.episode.cursor,
                    turn_limit,
                    at_last_row,
                    self.episode.episode_return
                );
            }
            self.episode.episode_over = true;
        }

        Transition {
            observation: self.episode.cursor,
            reward,
            done: self.episode.episode_over,
            info: StepInfo::from_counts(&self.lifetime.confusion, self.config.info_mode),
        }
    }

    fn reset(&mut self) {
        let policy = self.config.reset;
        self.episode.turn_count = 0;
        self.episode.episode_over = false;
        self.episode.episode_return = 0;
        if policy.rewind_cursor {
            self.episode.cursor = 0;
        }
        if policy.clear_stats {
            self.lifetime.confusion = ConfusionCounts::default();
        }
        if self.episode.cursor == self.last_row() {
            tracing::warn!(
                "Reset with cursor on the last row ({}); the next step will end the episode",
                self.episode.cursor
            );
        } else {
            tracing::info!("Reset episode at row {}", self.episode.cursor);
        }
    }

    fn obs_size(&self) -> usize {
        self.observation_space.n
    }

    fn action_size(&self) -> usize {
        Action::SPACE.n
    }
}
