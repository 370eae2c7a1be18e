//! # Formatting Utilities for Card Web
//!
//! Display formatting specific to the card screens. Address and balance
//! formatting live in [`shared::utils`].

use chrono::{DateTime, Utc};
use shared::dto::records::Direction;
use shared::utils::format_number;

/// Amount with currency unit, e.g. `1,500.00 XLM`.
///
/// ```rust
/// use card_web::utils::format::format_amount;
///
/// assert_eq!(format_amount(1500.0, "XLM"), "1,500.00 XLM");
/// ```
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{} {}", format_number(value, 2), currency)
}

/// Signed amount for the history table: `+25.75` incoming, `-12.50` outgoing.
pub fn format_signed_amount(value: f64, direction: Direction) -> String {
    let sign = match direction {
        Direction::Incoming => '+',
        Direction::Outgoing => '-',
    };
    format!("{}{}", sign, format_number(value.abs(), 2))
}

/// USD-style compact figure for dashboard tiles (`$125,847.50`).
pub fn format_usd(value: f64) -> String {
    format!("${}", format_number(value, 2))
}

/// Short date and time, e.g. `Aug 02, 2025 08:30`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y %H:%M").to_string()
}

/// Large counts in compact form (`45K`, `1.2M`).
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Badge class for a status enum, e.g. `status-active`.
pub fn status_class(status: &impl std::fmt::Debug) -> String {
    format!("status-{}", format!("{:?}", status).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_signed_amount() {
        assert_eq!(format_signed_amount(25.75, Direction::Incoming), "+25.75");
        assert_eq!(format_signed_amount(1000.0, Direction::Outgoing), "-1,000.00");
    }

    #[test]
    fn test_timestamp() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 2, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "Aug 02, 2025 08:30");
    }

    #[test]
    fn test_compact() {
        assert_eq!(format_compact(45_000.0), "45K");
        assert_eq!(format_compact(1_200_000.0), "1.2M");
        assert_eq!(format_compact(892.0), "892");
    }

    #[test]
    fn test_usd() {
        assert_eq!(format_usd(125_847.5), "$125,847.50");
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(&Direction::Incoming), "status-incoming");
    }
}
