//! Chart configuration model
//!
//! Mirrors the shape of a Chart.js configuration object so that a
//! serialized `ChartConfig` can be handed to the browser as-is. Tick
//! callbacks are described declaratively through [`TickFormat`].

use serde::{Deserialize, Serialize};

use super::format::TickFormat;
use super::types::{ChartDataPayload, ChartSlot};

const REVENUE_LINE_COLOR: &str = "rgb(75, 192, 192)";
const REVENUE_FILL_COLOR: &str = "rgba(75, 192, 192, 0.2)";
const REVENUE_LINE_TENSION: f64 = 0.1;

const HOURS_BAR_COLOR: &str = "rgba(54, 162, 235, 0.5)";
const HOURS_BORDER_COLOR: &str = "rgb(54, 162, 235)";
const HOURS_BORDER_WIDTH: u32 = 1;

/// Kind of chart to draw
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Complete configuration for one chart instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Labels and datasets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One labeled numeric series with its styling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tooltip {
    pub mode: TooltipMode,
    pub intersect: bool,
}

/// Which items a tooltip shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    /// Every series at the hovered index
    Index,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticks {
    pub format: TickFormat,
}

impl ChartOptions {
    /// Shared dashboard options: top legend, index tooltips, responsive
    /// with fixed aspect ratio, y-axis from zero
    fn dashboard(format: TickFormat) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: LegendPosition::Top,
                },
                tooltip: Tooltip {
                    mode: TooltipMode::Index,
                    intersect: false,
                },
            },
            scales: Scales {
                y: Axis {
                    begin_at_zero: true,
                    ticks: Ticks { format },
                },
            },
        }
    }
}

impl ChartConfig {
    /// Build the configuration a slot uses for the given payload
    pub fn for_slot(slot: ChartSlot, payload: &ChartDataPayload) -> Self {
        match slot {
            ChartSlot::Revenue => Self::revenue(payload),
            ChartSlot::Hours => Self::hours(payload),
        }
    }

    /// Filled line chart of revenue
    pub fn revenue(payload: &ChartDataPayload) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: payload.labels.clone(),
                datasets: vec![Dataset {
                    label: "Revenue ($)".to_string(),
                    data: payload.revenue.clone(),
                    border_color: REVENUE_LINE_COLOR.to_string(),
                    background_color: REVENUE_FILL_COLOR.to_string(),
                    border_width: None,
                    tension: Some(REVENUE_LINE_TENSION),
                    fill: Some(true),
                }],
            },
            options: ChartOptions::dashboard(TickFormat::Currency),
        }
    }

    /// Bar chart of hours worked
    pub fn hours(payload: &ChartDataPayload) -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: payload.labels.clone(),
                datasets: vec![Dataset {
                    label: "Hours".to_string(),
                    data: payload.hours.clone(),
                    border_color: HOURS_BORDER_COLOR.to_string(),
                    background_color: HOURS_BAR_COLOR.to_string(),
                    border_width: Some(HOURS_BORDER_WIDTH),
                    tension: None,
                    fill: None,
                }],
            },
            options: ChartOptions::dashboard(TickFormat::Hours),
        }
    }

    /// Number of points in the first dataset
    pub fn dataset_len(&self) -> usize {
        self.data.datasets.first().map(|d| d.data.len()).unwrap_or(0)
    }

    /// Label for a y-axis tick value
    pub fn format_tick(&self, value: f64) -> String {
        self.options.scales.y.ticks.format.format(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ChartDataPayload {
        ChartDataPayload::new(
            vec!["Mon".into(), "Tue".into(), "Wed".into()],
            vec![100.0, 250.5, 0.0],
            vec![4.0, 8.5, 0.0],
        )
    }

    #[test]
    fn test_revenue_config() {
        let config = ChartConfig::revenue(&payload());

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.labels.len(), 3);
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.dataset_len(), 3);
        assert_eq!(config.data.datasets[0].fill, Some(true));
        assert!(config.options.scales.y.begin_at_zero);
        assert_eq!(config.format_tick(1234.5), "$1234.50");
    }

    #[test]
    fn test_hours_config() {
        let config = ChartConfig::for_slot(ChartSlot::Hours, &payload());

        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.data.datasets[0].data, vec![4.0, 8.5, 0.0]);
        assert_eq!(config.data.datasets[0].border_width, Some(1));
        assert_eq!(config.format_tick(7.0), "7.0h");
    }

    #[test]
    fn test_shared_options() {
        for slot in ChartSlot::all() {
            let config = ChartConfig::for_slot(*slot, &payload());
            assert!(config.options.responsive);
            assert!(config.options.maintain_aspect_ratio);
            assert!(config.options.plugins.legend.display);
            assert_eq!(config.options.plugins.legend.position, LegendPosition::Top);
            assert_eq!(config.options.plugins.tooltip.mode, TooltipMode::Index);
            assert!(!config.options.plugins.tooltip.intersect);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ChartConfig::revenue(&payload())).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["maintainAspectRatio"], true);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(json["options"]["scales"]["y"]["ticks"]["format"], "currency");
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "rgb(75, 192, 192)");
        assert!(json["data"]["datasets"][0].get("borderWidth").is_none());
    }

    #[test]
    fn test_empty_payload() {
        let config = ChartConfig::hours(&ChartDataPayload::default());
        assert_eq!(config.dataset_len(), 0);
        assert!(config.data.labels.is_empty());
    }
}
