//! Quick-buy quotes for marketplace listings.
//!
//! A quote is recomputed from the listing on every change of quantity or
//! slippage; nothing is cached between renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::dto::records::MarketListing;
use tracing::info;

use crate::error::{CoreError, Result};

/// Slippage choices in basis points with their labels.
pub const SLIPPAGE_OPTIONS: [(u16, &str); 4] = [(10, "0.1%"), (50, "0.5%"), (100, "1.0%"), (200, "2.0%")];
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Flat fee per purchase, in XLM.
pub const NETWORK_FEE: f64 = 0.1;
const PLATFORM_FEE_RATE: f64 = 0.0025;
const IMPACT_PCT_PER_UNIT: f64 = 0.1;
const MAX_IMPACT_PCT: f64 = 2.5;
/// Cap when a listing does not set its own.
const DEFAULT_MAX_QUANTITY: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseQuote {
    pub listing_id: String,
    pub listing_name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub slippage_bps: u16,
    pub subtotal: f64,
    pub network_fee: f64,
    pub platform_fee: f64,
    /// Percent, capped at 2.5
    pub price_impact_pct: f64,
    pub price_impact: f64,
    pub total: f64,
}

pub fn max_quantity(listing: &MarketListing) -> u32 {
    if listing.max_quantity == 0 {
        DEFAULT_MAX_QUANTITY
    } else {
        listing.max_quantity
    }
}

/// Parse the quantity field; anything unparseable counts as 1.
pub fn parse_quantity(listing: &MarketListing, raw: &str) -> u32 {
    let requested = raw.trim().parse::<u32>().unwrap_or(1);
    requested.clamp(1, max_quantity(listing))
}

impl PurchaseQuote {
    pub fn new(listing: &MarketListing, quantity: u32, slippage_bps: u16) -> Self {
        let quantity = quantity.clamp(1, max_quantity(listing));
        let subtotal = listing.price * quantity as f64;
        let platform_fee = subtotal * PLATFORM_FEE_RATE;
        let price_impact_pct = (quantity as f64 * IMPACT_PCT_PER_UNIT).min(MAX_IMPACT_PCT);
        let price_impact = subtotal * price_impact_pct / 100.0;

        Self {
            listing_id: listing.id.clone(),
            listing_name: listing.name.clone(),
            unit_price: listing.price,
            quantity,
            slippage_bps,
            subtotal,
            network_fee: NETWORK_FEE,
            platform_fee,
            price_impact_pct,
            price_impact,
            total: subtotal + NETWORK_FEE + platform_fee + price_impact,
        }
    }

    /// Most the buyer can end up paying within the slippage tolerance.
    pub fn max_total(&self) -> f64 {
        self.total * (1.0 + self.slippage_bps as f64 / 10_000.0)
    }

    pub fn slippage_label(&self) -> String {
        SLIPPAGE_OPTIONS
            .iter()
            .find(|(bps, _)| *bps == self.slippage_bps)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| format!("{:.2}%", self.slippage_bps as f64 / 100.0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub quote: PurchaseQuote,
    pub confirmed_at: DateTime<Utc>,
}

/// Accept a quote. The buyer must have agreed to the terms.
pub fn confirm_purchase(quote: PurchaseQuote, agreed_to_terms: bool) -> Result<PurchaseReceipt> {
    if !agreed_to_terms {
        return Err(CoreError::Validation(
            "You must agree to the terms of service".to_string(),
        ));
    }

    info!(
        listing = %quote.listing_id,
        quantity = quote.quantity,
        total = quote.total,
        "purchase confirmed"
    );
    Ok(PurchaseReceipt {
        quote,
        confirmed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::records::RiskLevel;

    fn listing(price: f64, max_quantity: u32) -> MarketListing {
        MarketListing {
            id: "listing_1".to_string(),
            name: "Yield Card".to_string(),
            issuer: "StellarCard".to_string(),
            price,
            volume: 0.0,
            yield_pct: 4.0,
            change: 0.0,
            liquidity: 0.0,
            holders: 10,
            rating: 4.5,
            risk: RiskLevel::Low,
            is_new: false,
            is_featured: false,
            max_quantity,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_quote_breakdown() {
        // Arrange
        let listing = listing(100.0, 50);

        // Act
        let quote = PurchaseQuote::new(&listing, 5, DEFAULT_SLIPPAGE_BPS);

        // Assert
        assert!(close(quote.subtotal, 500.0));
        assert!(close(quote.platform_fee, 1.25));
        assert!(close(quote.price_impact_pct, 0.5));
        assert!(close(quote.price_impact, 2.5));
        assert!(close(quote.total, 500.0 + 0.1 + 1.25 + 2.5));
        assert!(close(quote.max_total(), quote.total * 1.005));
        assert_eq!(quote.slippage_label(), "0.5%");
    }

    #[test]
    fn test_price_impact_caps() {
        let quote = PurchaseQuote::new(&listing(1.0, 100), 80, 100);
        assert!(close(quote.price_impact_pct, 2.5));
    }

    #[test]
    fn test_quantity_clamped_to_listing() {
        let capped = listing(1.0, 10);
        assert_eq!(PurchaseQuote::new(&capped, 0, 50).quantity, 1);
        assert_eq!(PurchaseQuote::new(&capped, 25, 50).quantity, 10);

        assert_eq!(parse_quantity(&capped, "abc"), 1);
        assert_eq!(parse_quantity(&capped, " 7 "), 7);
        assert_eq!(parse_quantity(&capped, "999"), 10);
        assert_eq!(parse_quantity(&listing(1.0, 0), "999"), 100);
    }

    #[test]
    fn test_confirm_requires_terms() {
        let quote = PurchaseQuote::new(&listing(10.0, 5), 2, 10);

        let err = confirm_purchase(quote.clone(), false).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let receipt = confirm_purchase(quote.clone(), true).unwrap();
        assert_eq!(receipt.quote, quote);
    }
}
