use crate::{Dataset, DatasetError, Label};

/// Labels held as a literal in-memory sequence, with no feature columns.
///
/// Used wherever a deterministic dataset is needed without touching disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSequence {
    labels: Vec<Label>,
}

impl LabelSequence {
    #[must_use]
    pub fn new(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Builds a sequence from raw 0/1 values.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidLabel`] for the first value that is
    /// neither 0 nor 1.
    pub fn from_bits(bits: &[u8]) -> Result<Self, DatasetError> {
        let labels = bits
            .iter()
            .enumerate()
            .map(|(row, &bit)| {
                Label::try_from(bit).map_err(|value| DatasetError::InvalidLabel {
                    row,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl Dataset for LabelSequence {
    fn row_count(&self) -> usize {
        self.labels.len()
    }

    fn label_at(&self, index: usize) -> Label {
        self.labels[index]
    }
}
