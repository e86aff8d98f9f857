//! Driver wiring workers and aggregator together.

use std::sync::Arc;

use async_std::channel::bounded;
use async_std::task;
use futures::channel::oneshot;

use crate::aggregator::Aggregator;
use crate::client::Fetch;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::report;
use crate::result::RunResult;
use crate::worker::Worker;

/// Sends `config.number` GETs from `config.concurrency` workers and returns
/// the final totals.
///
/// `observer` is called from the aggregator on each 10% progress bucket.
pub async fn run<F, O>(fetcher: F, config: &Config, observer: O) -> Result<RunResult>
where
    F: Fetch + 'static,
    O: FnMut(&RunResult) + Send + 'static,
{
    let (token_tx, token_rx) = bounded::<usize>(config.concurrency);
    let (response_tx, response_rx) = bounded(config.concurrency);
    let (done_tx, done_rx) = oneshot::channel();

    let fetcher = Arc::new(fetcher);
    let url = Arc::new(config.url.clone());
    let workers: Vec<_> = (0..config.concurrency)
        .map(|id| {
            let worker = Worker::new(
                id,
                fetcher.clone(),
                url.clone(),
                token_rx.clone(),
                response_tx.clone(),
            );
            task::spawn(worker.run())
        })
        .collect();
    drop(token_rx);
    drop(response_tx);

    let aggregator = Aggregator::new(config.number).with_observer(observer);
    let aggregator = task::spawn(aggregator.run(response_rx, done_tx));

    for token in 0..config.number {
        if token_tx.send(token).await.is_err() {
            // every worker is gone
            break;
        }
    }
    token_tx.close();

    let result = done_rx.await;
    let mut received = 0;
    for worker in workers {
        received += worker.await;
    }
    aggregator.await;

    result.map_err(|_| Error::Incomplete {
        received,
        expected: config.number,
    })
}

/// [`run`] with progress lines going to the log.
pub async fn run_with_progress_log<F>(fetcher: F, config: &Config) -> Result<RunResult>
where
    F: Fetch + 'static,
{
    run(fetcher, config, |result| log::info!("{}", report::progress_line(result))).await
}
