use crate::core::{Fetcher, ProbeOutcome, ProbeRequest};
use crate::utils::error::Result;

pub struct ProbeEngine<F: Fetcher> {
    fetcher: F,
}

impl<F: Fetcher> ProbeEngine<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Runs one GET round trip. Request failures are folded into
    /// `ProbeOutcome::Failed`; any other error is returned to the caller.
    pub async fn run(&self, request: &ProbeRequest) -> Result<ProbeOutcome> {
        tracing::info!("Probing {}", request.url);

        match self.fetcher.fetch(request).await {
            Ok(report) => {
                tracing::info!(
                    "✅ {} answered {} in {}ms",
                    request.url,
                    report.status,
                    report.elapsed_ms
                );
                Ok(ProbeOutcome::Response(report))
            }
            Err(e) if e.is_request_failure() => {
                let message = e.describe();
                tracing::warn!("❌ Request to {} failed: {}", request.url, message);
                Ok(ProbeOutcome::Failed {
                    url: request.url.clone(),
                    message,
                })
            }
            Err(e) => Err(e),
        }
    }
}
