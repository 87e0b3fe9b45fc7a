//! Personal finance dashboard for two monobank accounts.
//!
//! Fetches the white card of each client from the
//! [monobank personal API](https://api.monobank.ua/docs/), merges both
//! statements while dropping transfers between the two cards, and renders
//! balances, cashback and debit/credit breakdowns.
//!
//! The pipeline lives in [`dashboard`]; HTTP access goes through the
//! [`api::BankApi`] trait so the merge logic can run without a network.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod money;
pub mod render;
#[cfg(feature = "server")]
pub mod server;

#[cfg(test)]
mod testing;
