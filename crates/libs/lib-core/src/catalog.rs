//! Static wallet catalog shown on the connection screen.

use shared::dto::wallet::{WalletAvailability, WalletOption, WalletRatings};

fn option(
    id: &str,
    name: &str,
    description: &str,
    features: [&str; 3],
    status: WalletAvailability,
    recommended: bool,
    ratings: WalletRatings,
) -> WalletOption {
    WalletOption {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        status,
        recommended,
        ratings,
    }
}

/// The wallets offered on the connection screen, in display order.
pub fn default_catalog() -> Vec<WalletOption> {
    vec![
        option(
            "freighter",
            "Freighter",
            "The most popular Stellar wallet extension with seamless browser integration and user-friendly interface.",
            ["Browser Extension", "Hardware Support", "Multi-Account"],
            WalletAvailability::Available,
            true,
            WalletRatings { security: 5, ease: 5, features: 4, mobile: 3, hardware: 5 },
        ),
        option(
            "albedo",
            "Albedo",
            "Web-based wallet with advanced features for power users and developers working with Stellar network.",
            ["Web-Based", "Advanced Features", "Developer Tools"],
            WalletAvailability::Available,
            false,
            WalletRatings { security: 4, ease: 3, features: 5, mobile: 4, hardware: 3 },
        ),
        option(
            "walletconnect",
            "WalletConnect",
            "Connect your mobile wallet securely using QR code scanning for cross-device compatibility.",
            ["Mobile Support", "QR Code", "Cross-Platform"],
            WalletAvailability::Available,
            false,
            WalletRatings { security: 4, ease: 4, features: 3, mobile: 5, hardware: 2 },
        ),
        option(
            "lobstr",
            "LOBSTR",
            "Mobile-first wallet with built-in trading features and comprehensive asset management.",
            ["Mobile App", "Built-in Trading", "Asset Management"],
            WalletAvailability::Unavailable,
            false,
            WalletRatings { security: 4, ease: 5, features: 4, mobile: 5, hardware: 2 },
        ),
    ]
}

/// Look up a wallet by id.
pub fn find<'a>(catalog: &'a [WalletOption], id: &str) -> Option<&'a WalletOption> {
    catalog.iter().find(|w| w.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = default_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|w| w.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_exactly_one_recommended() {
        let catalog = default_catalog();
        let recommended: Vec<_> = catalog.iter().filter(|w| w.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].id, "freighter");
    }

    #[test]
    fn test_find() {
        let catalog = default_catalog();
        assert_eq!(find(&catalog, "lobstr").map(|w| w.is_available()), Some(false));
        assert!(find(&catalog, "metamask").is_none());
    }
}
