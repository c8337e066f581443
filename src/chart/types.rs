//! Core data types for the earnings charts
//!
//! - `ChartDataPayload`: labels plus the revenue and hours series
//! - `ChartSlot`: which of the two charts a value belongs to
//! - `Period`: the aggregation window requested from the endpoint

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Chart data as served by the dashboard endpoint
///
/// The three sequences are expected to have the same length. This is not
/// enforced; see [`ChartDataPayload::is_aligned`]. Missing keys decode as
/// empty series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartDataPayload {
    /// X-axis labels, one per bucket
    pub labels: Vec<String>,
    /// Revenue per bucket
    pub revenue: Vec<f64>,
    /// Hours worked per bucket
    pub hours: Vec<f64>,
}

impl ChartDataPayload {
    /// Create a payload from its three series
    pub fn new(labels: Vec<String>, revenue: Vec<f64>, hours: Vec<f64>) -> Self {
        Self {
            labels,
            revenue,
            hours,
        }
    }

    /// Number of buckets (label count)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// True when both series have exactly one value per label
    pub fn is_aligned(&self) -> bool {
        self.revenue.len() == self.labels.len() && self.hours.len() == self.labels.len()
    }

    /// The numeric series a slot plots
    pub fn series(&self, slot: ChartSlot) -> &[f64] {
        match slot {
            ChartSlot::Revenue => &self.revenue,
            ChartSlot::Hours => &self.hours,
        }
    }
}

/// One of the two chart roles on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartSlot {
    /// Revenue over time (line chart)
    Revenue,
    /// Hours worked over time (bar chart)
    Hours,
}

impl ChartSlot {
    /// Both slots, in update order
    pub fn all() -> &'static [ChartSlot] {
        &[ChartSlot::Revenue, ChartSlot::Hours]
    }

    /// Conventional canvas identifier for this slot
    pub fn default_target(&self) -> &'static str {
        match self {
            ChartSlot::Revenue => "revenueChart",
            ChartSlot::Hours => "hoursChart",
        }
    }
}

impl std::fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartSlot::Revenue => write!(f, "revenue"),
            ChartSlot::Hours => write!(f, "hours"),
        }
    }
}

/// Aggregation window for the chart data endpoint
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bucket per day
    #[default]
    Daily,
    /// One bucket per ISO week
    Weekly,
    /// One bucket per calendar month
    Monthly,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[Period::Daily, Period::Weekly, Period::Monthly]
    }

    /// Query string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a period string is not recognised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown period '{0}' (expected daily, weekly or monthly)")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

/// Error returned when a slot selector is not recognised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown chart slot '{0}' (expected revenue or hours)")]
pub struct ParseSlotError(pub String);

impl FromStr for ChartSlot {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revenue" => Ok(ChartSlot::Revenue),
            "hours" => Ok(ChartSlot::Hours),
            _ => Err(ParseSlotError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserialize() {
        let json = r#"{"labels":["Mon","Tue"],"revenue":[10,20.5],"hours":[1,2]}"#;
        let payload: ChartDataPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.len(), 2);
        assert!(payload.is_aligned());
        assert_eq!(payload.series(ChartSlot::Revenue), &[10.0, 20.5]);
        assert_eq!(payload.series(ChartSlot::Hours), &[1.0, 2.0]);
    }

    #[test]
    fn test_payload_missing_series() {
        let payload: ChartDataPayload =
            serde_json::from_str(r#"{"labels":["Mon","Tue"],"revenue":[10,20]}"#).unwrap();

        assert_eq!(payload.revenue, vec![10.0, 20.0]);
        assert!(payload.hours.is_empty());
        assert!(!payload.is_aligned());
    }

    #[test]
    fn test_payload_misaligned() {
        let payload = ChartDataPayload::new(
            vec!["Mon".into(), "Tue".into(), "Wed".into()],
            vec![1.0, 2.0],
            vec![1.0, 2.0, 3.0],
        );
        assert!(!payload.is_aligned());
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn test_default_targets() {
        assert_eq!(ChartSlot::Revenue.default_target(), "revenueChart");
        assert_eq!(ChartSlot::Hours.default_target(), "hoursChart");
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("weekly".parse::<Period>().unwrap(), Period::Weekly);
        assert_eq!(" Monthly ".parse::<Period>().unwrap(), Period::Monthly);
        assert_eq!(Period::default(), Period::Daily);
        assert!("yearly".parse::<Period>().is_err());

        for period in Period::all() {
            assert_eq!(period.to_string().parse::<Period>().unwrap(), *period);
        }
    }

    #[test]
    fn test_slot_parse() {
        assert_eq!("hours".parse::<ChartSlot>().unwrap(), ChartSlot::Hours);
        assert!("profit".parse::<ChartSlot>().is_err());
    }
}
