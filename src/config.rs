use std::time::Duration;

use surf::Url;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub concurrency: usize,
    pub number: usize,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(url: &str, concurrency: usize, number: usize) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::Config(format!("invalid URL {url:?}: {e}")))?;
        if concurrency == 0 {
            return Err(Error::Config("concurrency must be at least 1".into()));
        }
        Ok(Self {
            url,
            concurrency,
            number,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let config = Config::new(&args.url, args.concurrency, args.number)?;
        Ok(match args.timeout {
            Some(0) => return Err(Error::Config("timeout must be at least 1 second".into())),
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}
