use crate::{
    batch::UNKNOWN_CODE,
    batch_configuration::BatchConfiguration,
    data::{status_prefix, GeneratedRequest},
    error::Error,
};
use async_trait::async_trait;
use futures::{stream, StreamExt, TryStreamExt};
use log::{debug, info};
use std::{
    collections::HashMap,
    convert::TryFrom,
    fmt::Debug,
    time::{Duration, Instant},
};

/// Sends a single generated request. Implementations own the network transport.
#[async_trait]
pub trait RequestExecutor: Debug {
    async fn execute(&self, request: &GeneratedRequest) -> Result<ResponseRecord, Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    /// 1-based position of the request in the batch.
    pub index: usize,
    pub description: String,
    pub method: String,
    pub url: String,
    pub expected_code: String,
    pub code_mismatch: bool,
    pub delay: Duration,
    pub elapsed: Duration,
    pub response: ResponseRecord,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub duration: Duration,
    pub results: Vec<BatchResult>,
}

impl BatchReport {
    pub fn mismatches(&self) -> impl Iterator<Item = &BatchResult> {
        self.results.iter().filter(|result| result.code_mismatch)
    }
}

/// Whether `status_code` contradicts the expected `code` of a request.
pub fn is_code_mismatch(code: &str, status_code: u16) -> bool {
    let expected = status_prefix(code);
    expected != UNKNOWN_CODE && expected != status_code.to_string()
}

/// The wait before the request at `position`, saturating at `Duration::MAX`.
fn cumulative_delay(request_delay: Duration, position: usize) -> Duration {
    u32::try_from(position + 1)
        .ok()
        .and_then(|requests| request_delay.checked_mul(requests))
        .unwrap_or(Duration::MAX)
}

/// Runs `batch` through `executor` and collects the results in batch order.
///
/// Request `i` starts after `(i + 1) * request_delay`, with at most `max_in_flight`
/// requests outstanding. The first executor error ends the run.
pub async fn run_batch(
    executor: &(dyn RequestExecutor + Send + Sync),
    batch: &[GeneratedRequest],
    configuration: &BatchConfiguration,
) -> Result<BatchReport, Error> {
    let started = Instant::now();
    let request_delay = configuration.request_delay();

    let mut results: Vec<BatchResult> = stream::iter(batch.iter().enumerate())
        .map(|(position, request)| {
            let delay = cumulative_delay(request_delay, position);
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                debug!("Making the request {} {}", request.method, request.url);
                let sent = Instant::now();
                let response = executor.execute(request).await?;
                let elapsed = sent.elapsed();

                Ok::<_, Error>(BatchResult {
                    index: position + 1,
                    description: request.description.clone(),
                    method: request.method.to_uppercase(),
                    url: request.url.clone(),
                    expected_code: request.code.clone(),
                    code_mismatch: is_code_mismatch(&request.code, response.status_code),
                    delay,
                    elapsed,
                    response,
                })
            }
        })
        .buffer_unordered(configuration.max_in_flight())
        .try_collect()
        .await?;

    results.sort_by_key(|result| result.index);

    let report = BatchReport {
        duration: started.elapsed(),
        results,
    };
    info!(
        "The batch of {} requests took {:?} with {} code mismatches",
        report.results.len(),
        report.duration,
        report.mismatches().count()
    );

    Ok(report)
}
