//! Data models for monobank personal API payloads.
//!
//! Every payload is parsed into these structs at the fetch boundary, so a
//! shape mismatch fails the request instead of leaking into the
//! dashboard.

mod account;
mod client_info;
mod enums;
mod ids;
mod jar;
mod statement;
mod transaction;

pub use account::Account;
pub use client_info::ClientInfo;
pub use enums::{AccountType, CashbackType};
pub use ids::{AccountId, ClientId, CurrencyCode, JarId, TransactionId};
pub use jar::Jar;
pub use statement::{STATEMENT_WINDOW_MS, StatementWindow};
pub use transaction::Transaction;
