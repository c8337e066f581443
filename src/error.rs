//! Chart error types
//!
//! Every failure the chart manager can hit. None of these escape the
//! manager; they are reported through the diagnostic channel instead.

use thiserror::Error;

/// Errors that can occur while fetching chart data or rendering a chart
#[derive(Error, Debug)]
pub enum ChartError {
    /// Rendering surface identifier did not resolve
    #[error("Canvas element with id '{0}' not found")]
    TargetNotFound(String),

    /// Endpoint answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Request { status: u16 },

    /// Network failure (connect, timeout, body read)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not a chart data payload
    #[error("Invalid chart data: {0}")]
    Parse(String),

    /// Renderer failed to create the chart instance
    #[error("Render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::Render(err.to_string())
    }
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
