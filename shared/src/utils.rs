//! # Shared Utility Functions
//!
//! Display formatting used by the view models in `lib-core` and the pages in `card-web`.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with 4/4
//!
//! ## Number Formatting
//!
//! - [`format_number`] - Fixed decimals with thousands separators
//! - [`format_balance`] - Balance strings, 2 to 7 fraction digits
//! - [`format_percentage`] - Signed percentage
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_balance};
//!
//! let address = "GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF";
//! assert_eq!(format_address(address, 8, 8), "GCKFBEIY...OBAAHZPF");
//! assert_eq!(format_balance("1,247.5634"), "1,247.5634");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF";
/// assert_eq!(format_address(addr, 6, 4), "GCKFBE...HZPF");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-1500.0, 0), "-1,500");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    let grouped = group_thousands(integer_part);

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Format a balance string for display.
///
/// Accepts values that already carry thousands separators. Renders at least
/// 2 and at most 7 fraction digits. Empty or unparseable input renders as `0.00`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_balance;
///
/// assert_eq!(format_balance("1,247.5634"), "1,247.5634");
/// assert_eq!(format_balance("100"), "100.00");
/// assert_eq!(format_balance(""), "0.00");
/// ```
pub fn format_balance(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let value = match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return "0.00".to_string(),
    };

    let mut rendered = format_number(value, 7);
    // Trim trailing zeros down to two fraction digits
    while rendered.ends_with('0') {
        let fraction_len = rendered.rsplit_once('.').map(|(_, f)| f.len()).unwrap_or(0);
        if fraction_len <= 2 {
            break;
        }
        rendered.pop();
    }
    rendered
}

/// Format percentage change with sign
pub fn format_percentage(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 8, 8), "GCKFBEIY...OBAAHZPF");
        assert_eq!(format_address(ADDR, 6, 4), "GCKFBE...HZPF");
        assert_eq!(truncate_address(ADDR), "GCKF...HZPF");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("", 8, 8), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-0.0, 2), "0.00");
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance("1,247.5634"), "1,247.5634");
        assert_eq!(format_balance("125847.5"), "125,847.50");
        assert_eq!(format_balance("0.123456789"), "0.1234568");
        assert_eq!(format_balance("not a number"), "0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.5), "+12.50%");
        assert_eq!(format_percentage(-1.2), "-1.20%");
    }
}
