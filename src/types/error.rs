use std::path::PathBuf;
use thiserror::Error;

/// Export pipeline error types
///
/// One variant per pipeline stage that can fail. Errors are not recovered
/// internally; the first failure aborts the run.
#[derive(Error, Debug)]
pub enum ExportError {
    /// HTTP client could not be constructed
    #[error("http client setup failed: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// Stats API request failed (transport error or non-2xx status)
    #[error("stats fetch from {url} failed: {source}")]
    FetchFailed { url: String, source: reqwest::Error },

    /// Stats API body was not the expected JSON shape
    #[error("malformed stats response from {url}: {source}")]
    MalformedResponse {
        url: String,
        source: serde_json::Error,
    },

    /// Chart create request failed (transport error or non-2xx status)
    #[error("chart render at {url} failed: {source}")]
    RenderFailed { url: String, source: reqwest::Error },

    /// Chart create response did not contain a usable image URL
    #[error("invalid chart render response from {url}: {detail}")]
    RenderResponseInvalid { url: String, detail: String },

    /// Rendered image could not be downloaded
    #[error("image download from {url} failed: {source}")]
    ImageDownloadFailed { url: String, source: reqwest::Error },

    /// Output file or its parent directories could not be written
    #[error("writing {} failed: {source}", path.display())]
    OutputWriteFailed { path: PathBuf, source: std::io::Error },

    /// The run was cancelled before completion
    #[error("cancelled")]
    Cancelled,
}

/// Result type alias for the export pipeline
pub type Result<T> = std::result::Result<T, ExportError>;
