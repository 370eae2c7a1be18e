//! # Core Library
//!
//! Wallet connection state, the connection lifecycle, view guards and display
//! models, plus the card creation wizard and marketplace quotes. Nothing here
//! touches the browser; `card-web` supplies storage and timers through the
//! traits in [`storage`] and [`lifecycle`].

pub mod broadcast;
pub mod catalog;
pub mod config;
pub mod deployment;
pub mod error;
pub mod fixtures;
pub mod guard;
pub mod lifecycle;
pub mod purchase;
pub mod query;
pub mod storage;
pub mod store;
pub mod view_model;

// Re-export commonly used types
pub use broadcast::{Broadcast, Subscription};
pub use config::Config;
pub use error::{ConnectionError, ConnectionErrorKind, CoreError, Result};
pub use lifecycle::{ConnectOutcome, ControllerState, LifecycleController, Phase};
pub use store::ConnectionStore;
