//! Environment-driven configuration.
//!
//! Tokens and settings are read once at startup and handed to the clients
//! explicitly; nothing below reads the environment on its own.

use core::time::Duration;

use secrecy::{ExposeSecret as _, SecretString};

use crate::cache::DEFAULT_TTL;
use crate::client::{DEFAULT_BASE_URL, MonobankClient};
use crate::error::{DashboardError, Result};
use crate::money::{DEFAULT_CURRENCY, MoneyFormatter};

/// Token of the first tracked client.
pub const FIRST_TOKEN_ENV: &str = "P1_MB_TOKEN";

/// Token of the second tracked client.
pub const SECOND_TOKEN_ENV: &str = "P2_MB_TOKEN";

/// Bank API base URL override.
pub const BASE_URL_ENV: &str = "MONOBANK_API_URL";

/// Address the web server listens on.
pub const BIND_ENV: &str = "DASHBOARD_BIND";

/// Response cache lifetime in seconds.
pub const CACHE_TTL_ENV: &str = "DASHBOARD_CACHE_TTL_SECS";

/// Display currency code.
pub const CURRENCY_ENV: &str = "DASHBOARD_CURRENCY";

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Runtime settings for the dashboard.
#[derive(Debug)]
pub struct Config {
    /// Token of the first client; empty if unset.
    pub first_token: SecretString,
    /// Token of the second client; empty if unset.
    pub second_token: SecretString,
    /// Bank API base URL.
    pub base_url: String,
    /// Web server listen address.
    pub bind: String,
    /// How long API responses are reused.
    pub cache_ttl: Duration,
    /// Currency code shown next to every amount.
    pub currency: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if a value cannot be parsed.
    #[inline]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` if it is unset.
    ///
    /// Missing tokens become empty strings: the bank rejects them on the
    /// first request rather than this function failing up front.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if a value cannot be parsed.
    #[inline]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_ttl = match lookup(CACHE_TTL_ENV) {
            Some(raw) => Duration::from_secs(raw.trim().parse::<u64>().map_err(|err| {
                DashboardError::Config {
                    key: CACHE_TTL_ENV,
                    message: err.to_string(),
                }
            })?),
            None => DEFAULT_TTL,
        };

        Ok(Self {
            first_token: SecretString::from(lookup(FIRST_TOKEN_ENV).unwrap_or_default()),
            second_token: SecretString::from(lookup(SECOND_TOKEN_ENV).unwrap_or_default()),
            base_url: non_empty(lookup(BASE_URL_ENV))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            bind: non_empty(lookup(BIND_ENV)).unwrap_or_else(|| DEFAULT_BIND.to_owned()),
            cache_ttl,
            currency: non_empty(lookup(CURRENCY_ENV))
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
        })
    }

    /// Builds one client per configured token, first then second.
    ///
    /// # Errors
    ///
    /// Returns an error if a client fails to build.
    #[inline]
    pub fn bank_clients(&self) -> Result<(MonobankClient, MonobankClient)> {
        Ok((
            self.bank_client(&self.first_token)?,
            self.bank_client(&self.second_token)?,
        ))
    }

    /// Returns the money formatter for the configured currency.
    #[inline]
    #[must_use]
    pub fn money(&self) -> MoneyFormatter {
        MoneyFormatter::new(self.currency.as_str())
    }

    /// Builds a client bound to `token`.
    fn bank_client(&self, token: &SecretString) -> Result<MonobankClient> {
        MonobankClient::builder()
            .token(token.expose_secret())
            .base_url(self.base_url.as_str())
            .cache_ttl(self.cache_ttl)
            .build()
    }
}

/// Treats blank values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Builds a config from a fixed set of variables.
    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|&(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.first_token.expose_secret(), "");
        assert_eq!(config.second_token.expose_secret(), "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.cache_ttl, DEFAULT_TTL);
        assert_eq!(config.currency, "UAH");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (FIRST_TOKEN_ENV, "token-1"),
            (SECOND_TOKEN_ENV, "token-2"),
            (BASE_URL_ENV, "http://localhost:9000"),
            (BIND_ENV, "0.0.0.0:8080"),
            (CACHE_TTL_ENV, " 5 "),
            (CURRENCY_ENV, "USD"),
        ])
        .unwrap();
        assert_eq!(config.first_token.expose_secret(), "token-1");
        assert_eq!(config.second_token.expose_secret(), "token-2");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.cache_ttl, Duration::from_secs(5));
        assert_eq!(config.money().currency(), "USD");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(BIND_ENV, "  "), (CURRENCY_ENV, "")]).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn invalid_cache_ttl_is_rejected() {
        let err = config_from(&[(CACHE_TTL_ENV, "a minute")]).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Config {
                key: CACHE_TTL_ENV,
                ..
            }
        ));
    }

    #[test]
    fn tokens_are_redacted_in_debug_output() {
        let config = config_from(&[(FIRST_TOKEN_ENV, "very-secret")]).unwrap();
        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[test]
    fn builds_clients_with_missing_tokens() {
        let config = config_from(&[]).unwrap();
        assert!(config.bank_clients().is_ok());
    }

    #[test]
    fn invalid_base_url_fails_client_build() {
        let config = config_from(&[(BASE_URL_ENV, "::not a url::")]).unwrap();
        assert!(matches!(
            config.bank_clients(),
            Err(DashboardError::InvalidUrl(_))
        ));
    }
}
