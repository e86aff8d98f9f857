//! Single owner of the running [`RunResult`].
//!
//! Workers only ever hand over [`Response`] values through a channel; the
//! aggregator is the one place the totals are mutated, so no locking is
//! needed. Completion is detected by count (`total == expected`), not by the
//! response channel closing, and is announced once through a oneshot.

use std::time::Instant;

use async_std::channel::Receiver;
use futures::channel::oneshot;

use crate::response::Response;
use crate::result::RunResult;

type Observer = Box<dyn FnMut(&RunResult) + Send>;

pub struct Aggregator {
    result: RunResult,
    last_bucket: Option<usize>,
    observer: Option<Observer>,
}

impl Aggregator {
    pub fn new(expected: usize) -> Self {
        Self {
            result: RunResult::new(expected),
            last_bucket: None,
            observer: None,
        }
    }

    /// Called with the running totals each time a new 10% bucket is reached.
    ///
    /// Buckets can be skipped when several percent are crossed by one response.
    /// The 0% bucket, hit by early responses when more than 100 are expected,
    /// is never reported.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&RunResult) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn result(&self) -> &RunResult {
        &self.result
    }

    pub fn is_done(&self) -> bool {
        self.result.is_complete()
    }

    /// Folds one response into the totals and returns whether the run is complete.
    ///
    /// # Panics
    ///
    /// If more responses arrive than were expected.
    pub fn record(&mut self, response: &Response) -> bool {
        assert!(
            self.result.total < self.result.expected,
            "received more responses than the {} expected",
            self.result.expected
        );
        self.result.add(response);

        let bucket = self.result.done_percentage();
        if bucket > 0 && bucket % 10 == 0 && self.last_bucket != Some(bucket) {
            self.last_bucket = Some(bucket);
            if let Some(observer) = self.observer.as_mut() {
                observer(&self.result);
            }
        }
        self.is_done()
    }

    /// Stamps the end time and hands back the frozen totals.
    pub fn finish(mut self) -> RunResult {
        self.result.end_time = Some(Instant::now());
        self.result
    }

    /// Drains `responses` until every expected response has been seen, then
    /// sends the result through `done`.
    ///
    /// If the channel closes first, `done` is dropped without a value.
    pub async fn run(mut self, responses: Receiver<Response>, done: oneshot::Sender<RunResult>) {
        while !self.is_done() {
            match responses.recv().await {
                Ok(response) => {
                    self.record(&response);
                }
                Err(_) => {
                    log::error!(
                        "response channel closed after {} of {} responses",
                        self.result.total,
                        self.result.expected
                    );
                    return;
                }
            }
        }
        if done.send(self.finish()).is_err() {
            log::debug!("driver stopped waiting for the result");
        }
    }
}
