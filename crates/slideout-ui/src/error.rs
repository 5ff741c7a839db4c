use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawerError {
    #[error("peek start delay must be zero or positive, got {0}")]
    NegativeStartDelay(i64),

    #[error("peek repeat delay must be zero or positive, got {0}")]
    NegativeDelay(i64),
}
