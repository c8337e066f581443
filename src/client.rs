//! Chart data endpoint client
//!
//! HTTP client for `GET {base}?period={period}` on the dashboard server.

use reqwest::header::COOKIE;
use reqwest::Client;

use crate::chart::{ChartDataPayload, Period};
use crate::error::{ChartError, ChartResult};

/// Chart data endpoint client
pub struct ChartDataClient {
    client: Client,
    config: ClientConfig,
}

/// Configuration for the chart data client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the dashboard server (e.g., "http://localhost:5000")
    pub server_url: String,
    /// Default path of the chart data endpoint
    pub data_path: String,
    /// Request timeout in milliseconds, 0 for none
    pub request_timeout_ms: u64,
    /// Session cookie sent with every request (`name=value`)
    pub session_cookie: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            data_path: "/api/chart_data".to_string(),
            request_timeout_ms: 0,
            session_cookie: None,
        }
    }
}

impl ChartDataClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ChartResult<Self> {
        let mut builder = Client::builder();
        if config.request_timeout_ms > 0 {
            builder = builder.timeout(std::time::Duration::from_millis(config.request_timeout_ms));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL for a period
    ///
    /// `base` overrides the configured data path. A relative base is
    /// joined onto the server URL, an absolute `http(s)://` URL is used
    /// as-is.
    pub fn url_for(&self, period: Period, base: Option<&str>) -> String {
        let base = base.unwrap_or(&self.config.data_path);

        let mut url = if base.starts_with("http://") || base.starts_with("https://") {
            base.to_string()
        } else {
            let origin = self.config.server_url.trim_end_matches('/');
            if base.starts_with('/') {
                format!("{}{}", origin, base)
            } else {
                format!("{}/{}", origin, base)
            }
        };

        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str("period=");
        url.push_str(&urlencoding::encode(period.as_str()));
        url
    }

    /// Fetch chart data for a period
    ///
    /// The body is decoded without validating series lengths.
    pub async fn fetch(&self, period: Period, base: Option<&str>) -> ChartResult<ChartDataPayload> {
        let url = self.url_for(period, base);
        tracing::debug!("Fetching chart data from {}", url);

        let mut request = self.client.get(&url);
        if let Some(cookie) = &self.config.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Request {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let payload: ChartDataPayload = serde_json::from_slice(&body)?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ChartDataClient {
        ChartDataClient::new(ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, "http://localhost:5000");
        assert_eq!(config.data_path, "/api/chart_data");
        assert_eq!(config.request_timeout_ms, 0);
        assert!(config.session_cookie.is_none());
    }

    #[test]
    fn test_url_default_path() {
        assert_eq!(
            client().url_for(Period::Weekly, None),
            "http://localhost:5000/api/chart_data?period=weekly"
        );
    }

    #[test]
    fn test_url_relative_base() {
        let client = ChartDataClient::new(ClientConfig {
            server_url: "http://dash.local/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            client.url_for(Period::Daily, Some("/v2/chart_data")),
            "http://dash.local/v2/chart_data?period=daily"
        );
        assert_eq!(
            client.url_for(Period::Daily, Some("chart_data")),
            "http://dash.local/chart_data?period=daily"
        );
    }

    #[test]
    fn test_url_absolute_base() {
        assert_eq!(
            client().url_for(Period::Monthly, Some("https://example.com/data?user=7")),
            "https://example.com/data?user=7&period=monthly"
        );
    }
}
