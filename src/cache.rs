//! Short-lived in-memory cache for raw API responses.
//!
//! The bank API rate-limits personal requests, so each
//! [`crate::client::MonobankClient`] keeps successful response bodies for a
//! short time and serves repeated page loads from memory. The cache is
//! best-effort: nothing depends on a hit for correctness.

use core::time::Duration;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crate::error::{DashboardError, Result};

/// Default time a response stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Thread-safe map from request key to response body with a fixed TTL.
///
/// A zero TTL disables caching entirely.
#[derive(Debug)]
pub struct ResponseCache {
    /// How long an entry is served after insertion.
    ttl: Duration,
    /// Entries behind a mutex for interior mutability.
    entries: Mutex<HashMap<String, Entry>>,
}

/// A cached response body.
#[derive(Debug)]
struct Entry {
    /// When the body was stored.
    stored_at: Instant,
    /// Raw response body.
    body: String,
}

impl Default for ResponseCache {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ResponseCache {
    /// Creates an empty cache whose entries live for `ttl`.
    #[inline]
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the configured time-to-live.
    #[inline]
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the fresh body stored under `key`, evicting it if stale.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Cache`] if the lock is poisoned.
    #[inline]
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        if self.ttl.is_zero() {
            return Ok(None);
        }
        let ttl = self.ttl;
        self.with_lock(|entries| {
            let fresh = entries
                .get(key)
                .map(|entry| (entry.stored_at.elapsed() < ttl, entry.body.clone()));
            match fresh {
                Some((true, body)) => Some(body),
                Some((false, _)) => {
                    let _stale = entries.remove(key);
                    None
                }
                None => None,
            }
        })
    }

    /// Stores `body` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Cache`] if the lock is poisoned.
    #[inline]
    pub fn insert(&self, key: String, body: String) -> Result<()> {
        if self.ttl.is_zero() {
            return Ok(());
        }
        self.with_lock(|entries| {
            let _old = entries.insert(
                key,
                Entry {
                    stored_at: Instant::now(),
                    body,
                },
            );
        })
    }

    /// Acquires the lock and applies a closure.
    fn with_lock<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut HashMap<String, Entry>) -> R,
    {
        let mut entries = self.entries.lock().map_err(|err| lock_error(&err))?;
        Ok(f(&mut entries))
    }
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &PoisonError<T>) -> DashboardError {
    DashboardError::Cache(err.to_string())
}
