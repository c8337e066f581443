//! # Earnings Charts
//!
//! Keeps the earnings dashboard's two charts (revenue over time, hours
//! worked over time) in sync with the dashboard's chart data endpoint.
//!
//! ## Modules
//!
//! - [`chart`]: Payload, slots, periods and chart configuration
//! - [`renderer`]: Rendering capability and its backends
//! - [`client`]: Chart data endpoint client
//! - [`manager`]: Slot ownership and the fetch-then-render cycle
//! - [`diagnostics`]: Sink for recovered failures
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use earnings_charts::{ChartDataClient, ChartManager, ClientConfig, MemoryRenderer, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChartDataClient::new(ClientConfig::default())?;
//!     let renderer = MemoryRenderer::with_surfaces(["revenueChart", "hoursChart"]);
//!     let mut manager = ChartManager::new(renderer, client);
//!
//!     manager.update_charts(Period::Weekly, None).await;
//!
//!     if let Some(chart) = manager.revenue_chart() {
//!         println!("Revenue chart has {} points", chart.dataset_len);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod manager;
pub mod renderer;

// Re-export top-level types for convenience
pub use chart::{
    format_currency, format_hours, ChartConfig, ChartDataPayload, ChartKind, ChartSlot, Period,
    TickFormat,
};

pub use client::{ChartDataClient, ClientConfig};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig};

pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};

pub use error::{ChartError, ChartResult};

pub use manager::{ChartManager, ChartTargets};

pub use renderer::{ChartHandle, FileRenderer, InstanceId, MemoryRenderer, Renderer};
