use serde::{Deserialize, Serialize};

use crate::ConfusionCounts;

/// How the diagnostic payload fills its `true_negative_rate` slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoMode {
    /// `true_negative_rate` repeats the true positive count, matching the
    /// payloads recorded by earlier versions of this environment.
    #[default]
    Compatible,
    /// `true_negative_rate` carries the true negative count.
    Corrected,
}

/// Diagnostic payload returned with every step.
///
/// Despite the field names the values are cumulative counts, not rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub true_positive_rate: u64,
    pub false_positive_rate: u64,
    pub true_negative_rate: u64,
    pub false_negative_rate: u64,
}

impl StepInfo {
    #[must_use]
    pub fn from_counts(counts: &ConfusionCounts, mode: InfoMode) -> Self {
        let true_negative_rate = match mode {
            InfoMode::Compatible => counts.true_positive,
            InfoMode::Corrected => counts.true_negative,
        };
        Self {
            true_positive_rate: counts.true_positive,
            false_positive_rate: counts.false_positive,
            true_negative_rate,
            false_negative_rate: counts.false_negative,
        }
    }

    /// # Errors
    ///
    /// Propagates `serde_json` serialisation errors.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
