use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("arrival record {index} is invalid: {reason}")]
    InvalidArrival {
        index:  usize,
        reason: String,
    },

    #[error("{got} initial floors supplied for {expected} elevators")]
    InitialFloorCount {
        expected: usize,
        got:      usize,
    },

    #[error("run did not finish within {limit} ticks")]
    TickLimitExceeded { limit: u64 },

    #[error(transparent)]
    Core(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
