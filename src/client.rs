//! The HTTP side of a run: one GET, one status code.

use std::time::Duration;

use async_trait::async_trait;
use async_std::future;
use surf::{Client, Url};

use crate::error::{Error, FetchError, Result};

/// Sends a single GET and reports the status code it got back.
///
/// Implementations must not retry; every call is exactly one attempt.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, url: &Url) -> std::result::Result<u16, FetchError>;
}

/// `Fetch` backed by a shared `surf::Client`.
///
/// Connection reuse and TLS settings are whatever surf's default backend does.
/// The per-request timeout is applied around the call, not inside surf, so an
/// expired request is always reported as [`FetchError::Timeout`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut config = surf::Config::new();
        if timeout.is_some() {
            config = config.set_timeout(None);
        }
        let client = Client::try_from(config).map_err(|e| Error::Client(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    async fn status(&self, url: &Url) -> std::result::Result<u16, FetchError> {
        self.client
            .get(url.as_str())
            .await
            .map(|res| u16::from(res.status()))
            .map_err(|err| FetchError::Transport(err.to_string()))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &Url) -> std::result::Result<u16, FetchError> {
        match self.timeout {
            Some(timeout) => future::timeout(timeout, self.status(url))
                .await
                .unwrap_or(Err(FetchError::Timeout(timeout))),
            None => self.status(url).await,
        }
    }
}
