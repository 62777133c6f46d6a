//! Client for the public bStats API
//!
//! Fetches the raw data points behind a plugin's chart. The API exposes them
//! as a JSON array of `[timestamp_ms, value]` pairs.

use crate::types::{ExportError, RawPoint, Result};
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Base URL of the public bStats API
const BSTATS_API_BASE: &str = "https://bstats.org/api/v1";

/// Samples the API records per day (one every 30 minutes)
const SAMPLES_PER_DAY: u32 = 24 * 2;

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for fetching chart data from bStats
pub struct BstatsClient {
    http: Client,
    base_url: String,
}

impl BstatsClient {
    /// Create a client against the public bStats API
    pub fn new() -> Result<Self> {
        Self::with_base_url(BSTATS_API_BASE)
    }

    /// Create a client against a custom API base (self-hosted instances)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ExportError::ClientSetup)?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch the raw samples covering the last `days` days of one plugin chart
    pub async fn fetch_chart_data(
        &self,
        plugin_id: u32,
        chart_key: &str,
        days: u32,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawPoint>> {
        let url = self.chart_data_url(plugin_id, chart_key, max_elements_for(days));
        debug!("Requesting {}", url);

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExportError::Cancelled),
            result = self.http.get(&url).send() => result,
        };
        let response = response
            .and_then(|r| r.error_for_status())
            .map_err(|source| ExportError::FetchFailed {
                url: url.clone(),
                source,
            })?;

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExportError::Cancelled),
            result = response.bytes() => result,
        };
        let body = body.map_err(|source| ExportError::FetchFailed {
            url: url.clone(),
            source,
        })?;

        let points = decode_points(&url, &body)?;
        debug!("Fetched {} raw samples", points.len());
        Ok(points)
    }

    fn chart_data_url(&self, plugin_id: u32, chart_key: &str, max_elements: u32) -> String {
        format!(
            "{}/plugins/{}/charts/{}/data?maxElements={}",
            self.base_url, plugin_id, chart_key, max_elements
        )
    }
}

/// Number of samples needed to cover `days` days at the API's native rate
fn max_elements_for(days: u32) -> u32 {
    days.saturating_mul(SAMPLES_PER_DAY)
}

/// Decode the API body: an array of `[timestamp_ms, value]` integer pairs
fn decode_points(url: &str, body: &[u8]) -> Result<Vec<RawPoint>> {
    let pairs: Vec<(i64, i64)> =
        serde_json::from_slice(body).map_err(|source| ExportError::MalformedResponse {
            url: url.to_string(),
            source,
        })?;

    Ok(pairs
        .into_iter()
        .map(|(timestamp_ms, value)| RawPoint {
            timestamp_ms,
            value,
        })
        .collect())
}
