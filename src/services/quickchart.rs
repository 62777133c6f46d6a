//! Client for the QuickChart rendering service
//!
//! Uploads a chart document to `/chart/create`, then downloads the image the
//! service rendered and writes it to disk.

use crate::types::{ExportError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// QuickChart create endpoint
const QUICKCHART_CREATE_URL: &str = "https://quickchart.io/chart/create";

/// Rendered image width in pixels
const IMAGE_WIDTH: &str = "800";

/// Rendered image height in pixels
const IMAGE_HEIGHT: &str = "200";

/// Output image format
const IMAGE_FORMAT: &str = "png";

/// Chart background
const IMAGE_BACKGROUND: &str = "transparent";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Create request body; QuickChart expects the dimensions as strings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateChartRequest<'a> {
    width: &'static str,
    height: &'static str,
    format: &'static str,
    background_color: &'static str,
    chart: &'a Value,
}

/// Create response (minimal fields)
#[derive(Debug, Deserialize)]
struct CreateChartResponse {
    url: String,
}

/// Client for rendering charts through QuickChart
pub struct QuickChartClient {
    http: Client,
    create_url: String,
}

impl QuickChartClient {
    /// Create a client against the public QuickChart service
    pub fn new() -> Result<Self> {
        Self::with_create_url(QUICKCHART_CREATE_URL)
    }

    /// Create a client against a custom create endpoint (self-hosted instances)
    pub fn with_create_url(create_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ExportError::ClientSetup)?;
        Ok(Self {
            http,
            create_url: create_url.to_string(),
        })
    }

    /// Render `chart` remotely and write the resulting image to `output`
    pub async fn render_to_file(
        &self,
        chart: &Value,
        output: &Path,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let image_url = self.create_chart(chart, cancel).await?;
        debug!("Chart rendered at {}", image_url);

        let image = self.download_image(&image_url, cancel).await?;
        write_image(output, &image, cancel).await
    }

    /// POST the chart document; returns the URL of the rendered image
    async fn create_chart(&self, chart: &Value, cancel: &CancellationToken) -> Result<String> {
        let request = CreateChartRequest {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            format: IMAGE_FORMAT,
            background_color: IMAGE_BACKGROUND,
            chart,
        };

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExportError::Cancelled),
            result = self.http.post(&self.create_url).json(&request).send() => result,
        };
        let response = response
            .and_then(|r| r.error_for_status())
            .map_err(|source| ExportError::RenderFailed {
                url: self.create_url.clone(),
                source,
            })?;

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExportError::Cancelled),
            result = response.bytes() => result,
        };
        let body = body.map_err(|source| ExportError::RenderFailed {
            url: self.create_url.clone(),
            source,
        })?;

        let created: CreateChartResponse =
            serde_json::from_slice(&body).map_err(|source| ExportError::RenderResponseInvalid {
                url: self.create_url.clone(),
                detail: format!("undecodable body: {}", source),
            })?;
        if created.url.is_empty() {
            return Err(ExportError::RenderResponseInvalid {
                url: self.create_url.clone(),
                detail: "empty image url".into(),
            });
        }
        Ok(created.url)
    }

    /// GET the rendered image bytes
    async fn download_image(&self, url: &str, cancel: &CancellationToken) -> Result<Vec<u8>> {
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExportError::Cancelled),
            result = self.http.get(url).send() => result,
        };
        let response = response
            .and_then(|r| r.error_for_status())
            .map_err(|source| ExportError::ImageDownloadFailed {
                url: url.to_string(),
                source,
            })?;

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ExportError::Cancelled),
            result = response.bytes() => result,
        };
        let body = body.map_err(|source| ExportError::ImageDownloadFailed {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }
}

/// Write the image, creating missing parent directories first
async fn write_image(path: &Path, image: &[u8], cancel: &CancellationToken) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| ExportError::OutputWriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ExportError::Cancelled),
        result = fs::write(path, image) => {
            result.map_err(|source| ExportError::OutputWriteFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
