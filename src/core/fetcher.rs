use crate::core::{Fetcher, HeaderEntry, ProbeReport, ProbeRequest};
use crate::utils::error::Result;
use crate::utils::validation::parse_target_url;
use chrono::Utc;
use reqwest::Client;
use std::time::Instant;

/// Performs the GET round trip with reqwest.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &ProbeRequest) -> Result<ProbeReport> {
        let url = parse_target_url(&request.url)?;

        let mut builder = self.client.get(url);
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!("Sending GET request to: {}", request.url);
        let fetched_at = Utc::now();
        let started = Instant::now();
        let response = builder.send().await?;

        tracing::debug!("Response status: {}", response.status());

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        // Headers must be copied out before text() consumes the response.
        // A repeated name becomes one entry at its first position, values joined.
        let header_map = response.headers();
        let headers = header_map
            .keys()
            .map(|name| HeaderEntry {
                name: name.as_str().to_string(),
                value: header_map
                    .get_all(name)
                    .iter()
                    .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect::<Vec<_>>();
        let body = response.text().await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        tracing::debug!(
            "Received {} bytes and {} headers in {}ms",
            body.len(),
            headers.len(),
            elapsed_ms
        );

        Ok(ProbeReport {
            url: final_url,
            status,
            headers,
            body,
            elapsed_ms,
            fetched_at,
        })
    }
}
