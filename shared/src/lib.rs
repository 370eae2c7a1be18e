//! # Shared Data Types Library
//!
//! Plain data shared between the connection core (`lib-core`) and the
//! browser application (`card-web`). Nothing in here performs I/O.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data types
//!   - **[`dto::wallet`]**: Wallet catalog entries and connection state
//!   - **[`dto::records`]**: Card, contract, transaction and listing display records
//! - **[`utils`]**: Display formatting helpers
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::format_balance`]**: Format balance strings with separators
//!
//! ## Serialization
//!
//! All types derive `Serialize` and `Deserialize`:
//! - Field names use **snake_case**
//! - Enums serialize to lowercase (or snake_case) strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::ConnectionState;
//! use shared::utils::format_address;
//!
//! let state = ConnectionState::connected("GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF", "Freighter");
//! assert!(state.connected);
//! assert_eq!(format_address(&state.address, 8, 8), "GCKFBEIY...OBAAHZPF");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
