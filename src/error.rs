use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not build HTTP client: {0}")]
    Client(String),

    /// The aggregator went away before seeing every response.
    #[error("run stopped after {received} of {expected} responses")]
    Incomplete { received: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single GET produced no status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}
