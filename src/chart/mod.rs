//! Chart data and configuration
//!
//! - **types**: Payload, slots and periods
//! - **config**: Chart configuration built from a payload
//! - **format**: Y-axis tick label formatters

mod config;
mod format;
mod types;

pub use config::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Legend, LegendPosition,
    Plugins, Scales, Ticks, Tooltip, TooltipMode,
};
pub use format::{format_currency, format_hours, TickFormat};
pub use types::{ChartDataPayload, ChartSlot, ParsePeriodError, ParseSlotError, Period};
