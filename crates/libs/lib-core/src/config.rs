//! # Application Configuration
//!
//! Timing and mock values for the connection flow and the simulated contract
//! deployment. Every component takes a
//! [`Config`] by value at construction; the global instance below is only a
//! convenience for the composition root.
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! assert_eq!(config.authorize_delay_ms, 2000);
//! ```
//!
//! Call [`init_config()`] once at startup to load overrides from the
//! environment. In the browser there is no process environment, so the
//! defaults apply.

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Placeholder account handed out by the simulated wallet.
pub const DEFAULT_MOCK_ADDRESS: &str = "GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF";
pub const DEFAULT_MOCK_BALANCE: &str = "1,247.5634";
pub const DEFAULT_HELP_URL: &str = "https://stellar.org/wallets";
pub const DEFAULT_DOCS_URL: &str = "https://developers.stellar.org";
pub const DEFAULT_SUPPORT_EMAIL: &str = "support@stellarcard.io";

const MAX_DELAY_MS: u32 = 60_000;

/// Connection flow configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause in the Select phase before authorization starts
    pub select_delay_ms: u32,
    /// Time the simulated wallet prompt stays open
    pub authorize_delay_ms: u32,
    /// Pause in the Verify phase before completion
    pub verify_delay_ms: u32,
    /// Simulated contract deployment time
    pub deploy_delay_ms: u32,
    /// Probability in `[0, 1]` that the simulated wallet rejects
    pub failure_rate: f64,
    pub mock_address: String,
    pub mock_balance: String,
    /// Opened instead of connecting when an unavailable wallet is chosen
    pub help_url: String,
    pub docs_url: String,
    pub support_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            select_delay_ms: 800,
            authorize_delay_ms: 2000,
            verify_delay_ms: 1500,
            deploy_delay_ms: 3000,
            failure_rate: 0.2,
            mock_address: DEFAULT_MOCK_ADDRESS.to_string(),
            mock_balance: DEFAULT_MOCK_BALANCE.to_string(),
            help_url: DEFAULT_HELP_URL.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `STELLARCARD_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            select_delay_ms: parse_var(&lookup, "STELLARCARD_SELECT_DELAY_MS", defaults.select_delay_ms)?,
            authorize_delay_ms: parse_var(&lookup, "STELLARCARD_AUTHORIZE_DELAY_MS", defaults.authorize_delay_ms)?,
            verify_delay_ms: parse_var(&lookup, "STELLARCARD_VERIFY_DELAY_MS", defaults.verify_delay_ms)?,
            deploy_delay_ms: parse_var(&lookup, "STELLARCARD_DEPLOY_DELAY_MS", defaults.deploy_delay_ms)?,
            failure_rate: parse_var(&lookup, "STELLARCARD_FAILURE_RATE", defaults.failure_rate)?,
            mock_address: lookup("STELLARCARD_MOCK_ADDRESS").unwrap_or(defaults.mock_address),
            mock_balance: lookup("STELLARCARD_MOCK_BALANCE").unwrap_or(defaults.mock_balance),
            help_url: lookup("STELLARCARD_HELP_URL").unwrap_or(defaults.help_url),
            docs_url: lookup("STELLARCARD_DOCS_URL").unwrap_or(defaults.docs_url),
            support_email: lookup("STELLARCARD_SUPPORT_EMAIL").unwrap_or(defaults.support_email),
        })
    }

    /// Parse a JSON config document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(CoreError::Config(format!(
                "failure_rate must be between 0 and 1, got {}",
                self.failure_rate
            )));
        }

        for (name, value) in [
            ("select_delay_ms", self.select_delay_ms),
            ("authorize_delay_ms", self.authorize_delay_ms),
            ("verify_delay_ms", self.verify_delay_ms),
            ("deploy_delay_ms", self.deploy_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(CoreError::Config(format!(
                    "{} must be at most {} ms, got {}",
                    name, MAX_DELAY_MS, value
                )));
            }
        }

        if self.mock_address.trim().is_empty() {
            return Err(CoreError::Config("mock_address cannot be empty".to_string()));
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CoreError::Config(format!("{} must be a valid number: {}", name, e))),
        None => Ok(default),
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Returns an error if a variable fails to parse, validation fails, or the
/// config has already been initialized.
pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| CoreError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration, using defaults if
/// [`init_config()`] was never called.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_match_connection_flow() {
        let config = Config::default();
        assert_eq!(config.select_delay_ms, 800);
        assert_eq!(config.authorize_delay_ms, 2000);
        assert_eq!(config.verify_delay_ms, 1500);
        assert_eq!(config.failure_rate, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("STELLARCARD_FAILURE_RATE", "0"),
            ("STELLARCARD_VERIFY_DELAY_MS", "10"),
        ]))
        .unwrap();
        assert_eq!(config.failure_rate, 0.0);
        assert_eq!(config.verify_delay_ms, 10);
        assert_eq!(config.select_delay_ms, 800);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = Config::from_lookup(lookup(&[("STELLARCARD_SELECT_DELAY_MS", "soon")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_deploy_delay_override_and_bound() {
        let config = Config::from_lookup(lookup(&[("STELLARCARD_DEPLOY_DELAY_MS", "250")])).unwrap();
        assert_eq!(config.deploy_delay_ms, 250);
        assert_eq!(Config::default().deploy_delay_ms, 3000);

        let slow = Config {
            deploy_delay_ms: 120_000,
            ..Config::default()
        };
        assert!(slow.validate().is_err());
    }

    #[test]
    fn test_validate_failure_rate_bounds() {
        let config = Config {
            failure_rate: 1.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "failure_rate": 1.0 }"#).unwrap();
        assert_eq!(config.failure_rate, 1.0);
        assert_eq!(config.mock_balance, DEFAULT_MOCK_BALANCE);
    }
}
