//! Capability trait for the two bank API calls the dashboard needs.
//!
//! [`crate::client::MonobankClient`] implements it over HTTP; tests swap
//! in a stub so the merge and aggregation logic runs without network
//! access.

use core::future::Future;

use crate::error::Result;
use crate::models::{AccountId, ClientInfo, StatementWindow, Transaction};

/// Read-only access to one client's profile and statements.
pub trait BankApi: core::fmt::Debug + Send + Sync {
    /// Fetches the client profile with its accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not match
    /// [`ClientInfo`].
    fn client_info(&self) -> impl Future<Output = Result<ClientInfo>> + Send;

    /// Fetches the statement of `account` over `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a list
    /// of [`Transaction`] objects.
    fn statement(
        &self,
        account: &AccountId,
        window: StatementWindow,
    ) -> impl Future<Output = Result<Vec<Transaction>>> + Send;
}
