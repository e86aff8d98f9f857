//! Fixed-count HTTP GET load generator.
//!
//! A driver feeds `number` work tokens to `concurrency` sending workers; each
//! worker turns a token into one GET and a [`Response`]; a single
//! [`Aggregator`] folds responses into a [`RunResult`] and hands it back once
//! every response is in.

pub mod aggregator;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod response;
pub mod result;
pub mod worker;

pub use aggregator::Aggregator;
pub use cli::Args;
pub use client::{Fetch, HttpFetcher};
pub use config::Config;
pub use error::{Error, FetchError, Result};
pub use response::Response;
pub use result::RunResult;
pub use worker::Worker;
