use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EnvError;

/// Finite set `{0, 1, .., n - 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    #[must_use]
    pub const fn contains(&self, x: usize) -> bool {
        x < self.n
    }
}

/// The agent's prediction for the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    NotFraud,
    Fraud,
}

impl Action {
    pub const SPACE: Discrete = Discrete::new(2);

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Action::NotFraud => 0,
            Action::Fraud => 1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::NotFraud => "not_fraud",
            Action::Fraud => "fraud",
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = EnvError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Action::NotFraud),
            1 => Ok(Action::Fraud),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
