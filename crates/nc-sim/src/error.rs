use nc_core::{NcError, Tick};
use nc_transport::StepStats;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] NcError),

    #[error("initial particle count must be positive, got {0}")]
    EmptyPopulation(usize),

    #[error("population accounting broke at {tick}: {stats:?}")]
    Accounting {
        tick:  Tick,
        stats: StepStats,
    },
}

pub type SimResult<T> = Result<T, SimError>;
