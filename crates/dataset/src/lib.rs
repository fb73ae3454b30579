#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Labeled datasets
//!
//! Read-only, row-addressable access to a labeled tabular dataset. The
//! environment only ever needs the row count and the binary label of a row,
//! which is exactly what the [`Dataset`] trait exposes.
//!
//! Two implementations are provided:
//!
//! -   [`ColumnarDataset`] keeps every column in memory and is loaded from a
//!     CSV file with a header row.
//! -   [`LabelSequence`] wraps a literal list of labels. It is what tests use.

mod columnar;
mod error;
mod label;
mod sequence;

use std::sync::Arc;

pub use columnar::{Column, ColumnarDataset, DEFAULT_LABEL_COLUMN};
pub use error::DatasetError;
pub use label::Label;
pub use sequence::LabelSequence;

/// Row-indexed label lookup over an immutable dataset.
pub trait Dataset {
    /// Number of rows. Fixed for the lifetime of the dataset.
    fn row_count(&self) -> usize;

    /// Label of row `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index >= self.row_count()`.
    fn label_at(&self, index: usize) -> Label;

    /// Tallies `(fraud, not_fraud)` rows with a single scan.
    fn count_labels(&self) -> (usize, usize) {
        (0..self.row_count()).fold((0, 0), |(pos, neg), i| {
            if self.label_at(i).is_fraud() {
                (pos + 1, neg)
            } else {
                (pos, neg + 1)
            }
        })
    }
}

impl<D: Dataset + ?Sized> Dataset for &D {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn label_at(&self, index: usize) -> Label {
        (**self).label_at(index)
    }
}

impl<D: Dataset + ?Sized> Dataset for Arc<D> {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn label_at(&self, index: usize) -> Label {
        (**self).label_at(index)
    }
}
