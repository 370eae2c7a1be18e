//! Application constants

/// Where "Continue to Dashboard" leads after a successful connection.
pub const POST_CONNECT_PATH: &str = "/dashboard-smart-contract-hub";

pub const BRAND_NAME: &str = "StellarCard";

// Filter choices shown on the marketplace
pub const PRICE_RANGES: &[(&str, &str)] = &[
    ("all", "All Prices"),
    ("0-50", "Under 50 XLM"),
    ("50-100", "50 - 100 XLM"),
    ("100-200", "100 - 200 XLM"),
    ("200+", "200+ XLM"),
];

// UI constants
pub const COPY_FEEDBACK_MS: u32 = 2000;

pub const NETWORK_NAME: &str = "Stellar Mainnet";
