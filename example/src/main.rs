mod error;
mod hyper_executor;

use batchgen::{BatchConfiguration, RequestTemplate, TokenPair};
use clap::Parser;
use error::Error;
use hyper_executor::HyperExecutor;
use log::info;
use std::{fs, path::PathBuf, time::Duration};

#[derive(Parser)]
#[command(name = "batchgen-example")]
#[command(about = "Generates and runs a batch of adversarial requests from one good request", long_about = None)]
struct Cli {
    /// Json file holding the good request: method, url, headers, description, json or data
    template: PathBuf,

    /// Pair whose replacement should be forbidden, as ORIGINAL=REPLACEMENT[=STATUS]
    #[arg(long = "forbidden", value_name = "PAIR", value_parser = parse_forbidden_pair)]
    forbidden_pairs: Vec<TokenPair>,

    /// Number of requests with corrupted headers
    #[arg(long, default_value = "1")]
    bad_header_count: usize,

    /// Leave the query string out of url mutations
    #[arg(long)]
    no_query_params: bool,

    /// Corrupt every url token, not only the ones holding digits
    #[arg(long)]
    full: bool,

    /// Add injection payloads to the body
    #[arg(long)]
    unsafe_bodies: bool,

    /// Delay added before each successive request (ms)
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Maximum number of requests in flight
    #[arg(long, default_value = "16")]
    max_in_flight: usize,

    /// Print the batch as json instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn configuration(&self) -> BatchConfiguration {
        let mut configuration = BatchConfiguration::new();
        configuration.set_forbidden_pairs(self.forbidden_pairs.iter().cloned());
        configuration.set_bad_header_count(self.bad_header_count);
        configuration.set_include_query_params(!self.no_query_params);
        configuration.set_full(self.full);
        configuration.set_unsafe_bodies(self.unsafe_bodies);
        configuration.set_request_delay(Duration::from_millis(self.delay_ms));
        configuration.set_max_in_flight(self.max_in_flight);
        configuration
    }
}

fn parse_forbidden_pair(value: &str) -> Result<TokenPair, Error> {
    let parts: Vec<&str> = value.split('=').collect();

    match parts.as_slice() {
        [original, replacement] if !original.is_empty() => {
            Ok(TokenPair::new(*original, *replacement))
        }
        [original, replacement, status] if !original.is_empty() && !status.is_empty() => {
            Ok(TokenPair::new(*original, *replacement).with_status(*status))
        }
        _ => Err(Error::InvalidForbiddenPair(value.into())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let cli = Cli::parse();
    let configuration = cli.configuration();

    let template: RequestTemplate = serde_json::from_str(&fs::read_to_string(&cli.template)?)?;
    let batch = batchgen::generate_batch(&template, &configuration)?;
    info!("Generated {} requests from {}", batch.len(), cli.template.display());

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    let executor = HyperExecutor::new();
    let report = batchgen::run_batch(&executor, &batch, &configuration).await?;

    for result in &report.results {
        println!(
            "{:>4} {:<8} {:>3} {} {} {} ({:?})",
            result.index,
            result.expected_code,
            result.response.status_code,
            if result.code_mismatch { "MISMATCH" } else { "ok" },
            result.method,
            result.url,
            result.elapsed
        );
    }
    println!(
        "{} requests in {:?}, {} code mismatches",
        report.results.len(),
        report.duration,
        report.mismatches().count()
    );

    Ok(())
}
