//! # Data Types
//!
//! ## Module Organization
//!
//! - [`wallet`] - Wallet catalog, connection state, account summaries
//! - [`records`] - Display records for the dashboard, marketplace and history screens
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "connected": true,
//!   "address": "GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF",
//!   "wallet_name": "Freighter"
//! }
//! ```

pub mod records;
pub mod wallet;

pub use records::*;
pub use wallet::*;
