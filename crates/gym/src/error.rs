use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("action {0} is outside the action space")]
    InvalidAction(usize),
    #[error("dataset has no rows")]
    EmptyDataset,
    #[error("invalid environment config: {0}")]
    Config(#[from] serde_json::Error),
}
