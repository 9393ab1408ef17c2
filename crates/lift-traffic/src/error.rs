use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
