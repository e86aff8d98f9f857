use std::sync::Arc;
use std::time::Instant;

use async_std::channel::{Receiver, Sender};
use surf::Url;

use crate::client::Fetch;
use crate::response::Response;

/// Pulls work tokens off the shared queue and sends one GET per token.
pub struct Worker<F> {
    id: usize,
    fetcher: Arc<F>,
    url: Arc<Url>,
    tokens: Receiver<usize>,
    responses: Sender<Response>,
}

impl<F: Fetch> Worker<F> {
    pub fn new(
        id: usize,
        fetcher: Arc<F>,
        url: Arc<Url>,
        tokens: Receiver<usize>,
        responses: Sender<Response>,
    ) -> Self {
        Self {
            id,
            fetcher,
            url,
            tokens,
            responses,
        }
    }

    /// Runs until the token queue is closed and drained.
    ///
    /// Returns how many responses were handed to the aggregator.
    pub async fn run(self) -> usize {
        log::debug!("worker {} started", self.id);
        let mut sent = 0;
        while let Ok(_token) = self.tokens.recv().await {
            let start = Instant::now();
            let outcome = self.fetcher.get(&self.url).await;
            let time_taken = start.elapsed();
            if let Err(err) = &outcome {
                log::warn!("Error sending request: {}", err);
            }

            let response = Response::from_outcome(&outcome, time_taken);
            if self.responses.send(response).await.is_err() {
                log::debug!("worker {}: aggregator gone, stopping", self.id);
                break;
            }
            sent += 1;
        }
        log::debug!("worker {} finished after {} requests", self.id, sent);
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use async_std::channel::bounded;
    use async_trait::async_trait;

    struct Refused;

    #[async_trait]
    impl Fetch for Refused {
        async fn get(&self, _url: &Url) -> Result<u16, FetchError> {
            Err(FetchError::Transport("connection refused".into()))
        }
    }

    struct Status(u16);

    #[async_trait]
    impl Fetch for Status {
        async fn get(&self, _url: &Url) -> Result<u16, FetchError> {
            Ok(self.0)
        }
    }

    fn url() -> Arc<Url> {
        Arc::new(Url::parse("http://127.0.0.1:9/").unwrap())
    }

    #[async_std::test]
    async fn errors_do_not_stop_the_worker() {
        let (token_tx, token_rx) = bounded(8);
        let (resp_tx, resp_rx) = bounded(8);
        for i in 0..3 {
            token_tx.send(i).await.unwrap();
        }
        drop(token_tx);

        let sent = Worker::new(0, Arc::new(Refused), url(), token_rx, resp_tx).run().await;
        assert_eq!(sent, 3);
        for _ in 0..3 {
            let res = resp_rx.recv().await.unwrap();
            assert_eq!(res.status_code, 0);
            assert!(!res.pass);
        }
        assert!(resp_rx.recv().await.is_err());
    }

    #[async_std::test]
    async fn exits_on_closed_queue_without_work() {
        let (token_tx, token_rx) = bounded::<usize>(1);
        let (resp_tx, _resp_rx) = bounded(1);
        drop(token_tx);
        let sent = Worker::new(1, Arc::new(Status(200)), url(), token_rx, resp_tx).run().await;
        assert_eq!(sent, 0);
    }

    #[async_std::test]
    async fn stops_when_aggregator_is_gone() {
        let (token_tx, token_rx) = bounded(4);
        let (resp_tx, resp_rx) = bounded(4);
        token_tx.send(0).await.unwrap();
        token_tx.send(1).await.unwrap();
        drop(resp_rx);
        let sent = Worker::new(2, Arc::new(Status(204)), url(), token_rx, resp_tx).run().await;
        assert_eq!(sent, 0);
    }
}
