use clap::Parser;
use getbench::{pipeline, report, Args, Config, HttpFetcher};

#[async_std::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::try_from(args)?;
    log::info!("{}", report::startup_line(&config));

    let fetcher = HttpFetcher::new(config.timeout)?;
    let result = pipeline::run_with_progress_log(fetcher, &config).await?;

    for line in report::summary_lines(&result) {
        log::info!("{}", line);
    }
    Ok(())
}
