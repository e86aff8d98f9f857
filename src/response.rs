use std::time::Duration;

use crate::error::FetchError;

/// Outcome of one GET attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    /// 0 when the attempt failed before a status was obtained.
    pub status_code: u16,
    pub pass: bool,
    pub time_taken: Duration,
}

impl Response {
    pub fn from_outcome(outcome: &Result<u16, FetchError>, time_taken: Duration) -> Self {
        match outcome {
            Ok(code) => Self {
                status_code: *code,
                pass: (200..300).contains(code),
                time_taken,
            },
            Err(_) => Self {
                status_code: 0,
                pass: false,
                time_taken,
            },
        }
    }
}
