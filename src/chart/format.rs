//! Y-axis tick label formatters

use serde::{Deserialize, Serialize};

/// How a y-axis tick value is turned into a label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TickFormat {
    /// `$` prefix, two decimals
    Currency,
    /// One decimal, `h` suffix
    Hours,
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Currency => format_currency(value),
            TickFormat::Hours => format_hours(value),
        }
    }
}

/// Format a revenue tick: `1234.5` -> `"$1234.50"`
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format an hours tick: `7` -> `"7.0h"`
pub fn format_hours(value: f64) -> String {
    format!("{:.1}h", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(99.999), "$100.00");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_hours(7.0), "7.0h");
        assert_eq!(format_hours(7.26), "7.3h");
        assert_eq!(format_hours(0.0), "0.0h");
    }

    #[test]
    fn test_tick_format_dispatch() {
        assert_eq!(TickFormat::Currency.format(10.0), "$10.00");
        assert_eq!(TickFormat::Hours.format(2.5), "2.5h");
    }
}
