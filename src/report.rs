use std::time::Duration;

use crate::config::Config;
use crate::result::RunResult;

pub fn startup_line(config: &Config) -> String {
    let timeout = match config.timeout {
        Some(t) => format!("{}s", t.as_secs_f64()),
        None => "client default".to_string(),
    };
    format!(
        "Starting job with concurrency = {}, numberOfRequests = {}, timeout = {} and url = {}",
        config.concurrency, config.number, timeout, config.url
    )
}

pub fn progress_line(result: &RunResult) -> String {
    format!(
        "Progress: Requests sent = {}, Successful = {}, Failed = {}",
        result.total,
        result.total_pass,
        result.failed()
    )
}

fn secs(d: Option<Duration>) -> String {
    match d {
        Some(d) => format!("{:.4}s", d.as_secs_f64()),
        None => "-".to_string(),
    }
}

pub fn summary_lines(result: &RunResult) -> Vec<String> {
    vec![
        format!("Total Requests        : {}", result.total),
        format!("Total Passed          : {}", result.total_pass),
        format!("Total Failed          : {}", result.failed()),
        format!("Pass Percent          : {:.2}%", result.pass_percentage()),
        format!("Average Time per req  : {:.4}s", result.average_time_taken().as_secs_f64()),
        format!("Slowest Request       : {}", secs(result.highest_time_taken)),
        format!("Fastest Request       : {}", secs(result.lowest_time_taken)),
        format!("Total Time Taken      : {:.4}s", result.time_elapsed().as_secs_f64()),
    ]
}
