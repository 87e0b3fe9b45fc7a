//! Merging, deduplication and aggregation of the two account histories.
//!
//! [`load_dashboard`] runs the whole pipeline: it fetches both client
//! profiles, picks their white cards, fetches both statements, drops
//! internal transfers between the two accounts and sums up what is left.

use core::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::api::BankApi;
use crate::error::Result;
use crate::models::{Account, StatementWindow, Transaction};

/// Result of one dashboard load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both accounts were found and their histories merged.
    Ready(Dashboard),
    /// At least one client has no white card; no statement was fetched.
    WhiteCardNotFound,
}

/// Transactions of one direction with their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Sum of `amount` over `entries` (minor units).
    pub total: i64,
    /// Entries, most recent first.
    pub entries: Vec<Transaction>,
}

impl Section {
    /// Collects the entries matching `predicate`, keeping their order.
    fn matching<F>(transactions: &[Transaction], predicate: F) -> Self
    where
        F: Fn(&Transaction) -> bool,
    {
        let entries: Vec<Transaction> = transactions
            .iter()
            .filter(|&tx| predicate(tx))
            .cloned()
            .collect();
        let total = saturating_sum(entries.iter().map(|tx| tx.amount));
        Self { total, entries }
    }
}

/// Aggregated view of both accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Combined balance of both white cards (minor units).
    pub balance: i64,
    /// Cashback over every merged transaction (minor units).
    pub cashback_total: i64,
    /// Incoming money.
    pub debit: Section,
    /// Outgoing money; its total is never positive.
    pub credit: Section,
}

impl Dashboard {
    /// Aggregates an already merged history.
    ///
    /// The balance comes from the accounts themselves, not from the
    /// transactions. Zero-amount entries land in neither section. Sums
    /// saturate at the `i64` bounds instead of overflowing.
    #[inline]
    #[must_use]
    pub fn new(first: &Account, second: &Account, merged: &[Transaction]) -> Self {
        Self {
            balance: first.balance.saturating_add(second.balance),
            cashback_total: saturating_sum(merged.iter().map(|tx| tx.cashback_amount)),
            debit: Section::matching(merged, Transaction::is_debit),
            credit: Section::matching(merged, Transaction::is_credit),
        }
    }
}

/// Adds up minor-unit amounts, clamping at the `i64` bounds.
fn saturating_sum<I: Iterator<Item = i64>>(amounts: I) -> i64 {
    amounts.fold(0, i64::saturating_add)
}

/// Drops every transaction that is mirrored by some entry of the list.
///
/// An entry is dropped when any element, itself included, booked the
/// exact negated amount at the same second. Zero-amount entries therefore
/// always go, and every member of a mirrored group goes, not just one
/// pair.
#[inline]
#[must_use]
pub fn filter_transfers_between(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| !transactions.iter().any(|other| other.mirrors(tx)))
        .cloned()
        .collect()
}

/// Concatenates both histories, removes transfers between them and sorts
/// the rest newest first.
///
/// The sort is stable, so entries booked at the same second keep the
/// `first`-then-`second` order.
#[inline]
#[must_use]
pub fn merge_histories(first: Vec<Transaction>, second: Vec<Transaction>) -> Vec<Transaction> {
    let mut combined = first;
    combined.extend(second);
    let mut merged = filter_transfers_between(&combined);
    merged.sort_by_key(|tx| Reverse(tx.time));
    merged
}

/// Fetches both accounts and builds the dashboard as of `now`.
///
/// Both profiles are fetched concurrently, then both statements. If either
/// client lacks a white card the load stops before any statement request.
///
/// # Errors
///
/// Returns the first error of any fetch; nothing partial is returned.
#[inline]
#[tracing::instrument(skip_all)]
pub async fn load_dashboard<A: BankApi>(
    first: &A,
    second: &A,
    now: DateTime<Utc>,
) -> Result<Outcome> {
    let (first_client, second_client) =
        tokio::try_join!(first.client_info(), second.client_info())?;

    let (Some(first_card), Some(second_card)) =
        (first_client.white_card(), second_client.white_card())
    else {
        tracing::warn!(
            first_client = %first_client.client_id,
            second_client = %second_client.client_id,
            "white card not found"
        );
        return Ok(Outcome::WhiteCardNotFound);
    };

    let window = StatementWindow::trailing_month(now);
    tracing::debug!(
        first_account = %first_card.id,
        second_account = %second_card.id,
        from = %window.from,
        to = %window.to,
        "fetching statements"
    );
    let (first_history, second_history) = tokio::try_join!(
        first.statement(&first_card.id, window),
        second.statement(&second_card.id, window),
    )?;

    let fetched = first_history.len() + second_history.len();
    let merged = merge_histories(first_history, second_history);
    tracing::debug!(fetched, kept = merged.len(), "merged statements");

    Ok(Outcome::Ready(Dashboard::new(first_card, second_card, &merged)))
}
