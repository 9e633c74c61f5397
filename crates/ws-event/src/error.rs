use thiserror::Error;

use ws_core::{CoreError, ValidationErrors};

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event parse error: {0}")]
    Parse(String),

    #[error("invalid events: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EventResult<T> = Result<T, EventError>;
