#![allow(dead_code)]

use dataset::{Label, LabelSequence};

/// The five-row dataset `[0, 0, 1, 0, 1]`.
pub fn five_rows() -> LabelSequence {
    LabelSequence::from_bits(&[0, 0, 1, 0, 1]).unwrap()
}

/// `n` rows where every third row is fraud.
pub fn rows(n: usize) -> LabelSequence {
    LabelSequence::new(
        (0..n)
            .map(|i| if i % 3 == 2 { Label::Fraud } else { Label::NotFraud })
            .collect(),
    )
}
