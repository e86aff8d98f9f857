use clap::Parser;

/// Fire a fixed number of GET requests at a URL
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target URL
    pub url: String,
    /// Number of parallel workers to send the requests from
    #[arg(short, long, default_value_t = 10)]
    pub concurrency: usize,
    /// Number of requests to send
    #[arg(short, long, default_value_t = 100)]
    pub number: usize,
    /// Per-request timeout in secs (client default when absent)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}
