use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("label column `{0}` not found in header")]
    MissingColumn(String),
    #[error("row {row}: label `{value}` is not 0 or 1")]
    InvalidLabel { row: usize, value: String },
    #[error("row {row}: feature `{column}` has non-numeric value `{value}`")]
    InvalidFeature {
        row: usize,
        column: String,
        value: String,
    },
}
