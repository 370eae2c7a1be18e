//! Select-box values to typed choices

use serde::de::DeserializeOwned;

/// Parse a `<select>` value into a serde enum; `"all"` or anything unknown
/// means no choice.
pub fn parse_choice<T: DeserializeOwned>(raw: &str) -> Option<T> {
    if raw.is_empty() || raw == "all" {
        return None;
    }
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::query::{ListingCategory, ListingSort};
    use shared::dto::records::TransactionKind;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice::<ListingCategory>("defi"), Some(ListingCategory::DeFi));
        assert_eq!(parse_choice::<ListingSort>("price-high"), Some(ListingSort::PriceHigh));
        assert_eq!(parse_choice::<TransactionKind>("card_payment"), Some(TransactionKind::CardPayment));
    }

    #[test]
    fn test_all_and_unknown_are_none() {
        assert_eq!(parse_choice::<ListingCategory>("all"), None);
        assert_eq!(parse_choice::<ListingCategory>("bonds"), None);
    }
}
