//! Scheduler error types.

use thiserror::Error;

use crate::schedule::Mode;

/// Errors that can occur while building a schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{rounds} rounds requested but {mode} only has {limit} without repeated opponents")]
    TooManyRounds {
        rounds: usize,
        limit: usize,
        mode: Mode,
    },

    #[error("unknown pairing mode: {0}")]
    UnknownMode(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
