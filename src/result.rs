use std::time::{Duration, Instant};

use crate::response::Response;

/// Running totals for a run, frozen once every expected response is in.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub total: usize,
    pub total_pass: usize,
    pub expected: usize,
    pub total_time_taken: Duration,
    pub lowest_time_taken: Option<Duration>,
    pub highest_time_taken: Option<Duration>,
    pub start_time: Instant,
    pub end_time: Option<Instant>,
}

impl RunResult {
    pub fn new(expected: usize) -> Self {
        Self {
            total: 0,
            total_pass: 0,
            expected,
            total_time_taken: Duration::ZERO,
            lowest_time_taken: None,
            highest_time_taken: None,
            start_time: Instant::now(),
            end_time: None,
        }
    }

    pub(crate) fn add(&mut self, response: &Response) {
        self.total += 1;
        if response.pass {
            self.total_pass += 1;
        }
        self.total_time_taken += response.time_taken;
        self.lowest_time_taken = Some(match self.lowest_time_taken {
            Some(lowest) => lowest.min(response.time_taken),
            None => response.time_taken,
        });
        self.highest_time_taken = Some(match self.highest_time_taken {
            Some(highest) => highest.max(response.time_taken),
            None => response.time_taken,
        });
    }

    pub fn failed(&self) -> usize {
        self.total - self.total_pass
    }

    pub fn is_complete(&self) -> bool {
        self.total == self.expected
    }

    /// 0.0 when nothing was sent.
    pub fn pass_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.total_pass as f64 / self.total as f64 * 100.0
    }

    /// Floor of the share of expected responses seen so far.
    pub fn done_percentage(&self) -> usize {
        if self.expected == 0 {
            return 100;
        }
        self.total * 100 / self.expected
    }

    pub fn average_time_taken(&self) -> Duration {
        if self.total == 0 {
            return Duration::ZERO;
        }
        self.total_time_taken.div_f64(self.total as f64)
    }

    /// Wall clock time from aggregator start to completion, or to now while still running.
    pub fn time_elapsed(&self) -> Duration {
        self.end_time
            .unwrap_or_else(Instant::now)
            .saturating_duration_since(self.start_time)
    }
}
