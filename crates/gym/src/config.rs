use serde::{Deserialize, Serialize};

use crate::{EnvError, InfoMode};

/// Episodes are truncated once the turn count exceeds this.
pub const DEFAULT_TURNS_MAX: usize = 200;

/// What `reset` clears beyond the turn counter and done flag.
///
/// Both default to `false`, in which case a new episode resumes at the row
/// where the previous one stopped and the confusion counters keep
/// accumulating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetPolicy {
    pub rewind_cursor: bool,
    pub clear_stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub turns_max: usize,
    pub reset: ResetPolicy,
    pub info_mode: InfoMode,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            turns_max: DEFAULT_TURNS_MAX,
            reset: ResetPolicy::default(),
            info_mode: InfoMode::default(),
        }
    }
}

impl EnvConfig {
    /// Parses a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] if the JSON is malformed or has fields of
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, EnvError> {
        Ok(serde_json::from_str(json)?)
    }
}
