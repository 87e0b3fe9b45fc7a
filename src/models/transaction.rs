//! Statement entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CurrencyCode, TransactionId};

/// One statement entry of a card account.
///
/// Amounts are signed minor units: positive values are money coming in,
/// negative values are money going out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Entry identifier.
    pub id: TransactionId,
    /// Booking time (Unix seconds).
    pub time: i64,
    /// Merchant or counterparty description.
    pub description: String,
    /// Merchant Category Code.
    pub mcc: u32,
    /// MCC before any correction by the bank.
    pub original_mcc: u32,
    /// Whether the amount is still on hold.
    pub hold: bool,
    /// Amount in account currency (minor units).
    pub amount: i64,
    /// Amount in transaction currency (minor units).
    pub operation_amount: i64,
    /// Transaction currency.
    pub currency_code: CurrencyCode,
    /// Commission charged (minor units).
    pub commission_rate: i64,
    /// Cashback accrued (minor units).
    pub cashback_amount: i64,
    /// Account balance after this entry (minor units).
    pub balance: i64,
    /// User comment attached to a transfer.
    #[serde(default)]
    pub comment: Option<String>,
    /// Receipt number for check.gov.ua.
    #[serde(default)]
    pub receipt_id: Option<String>,
    /// Invoice number for business clients.
    #[serde(default)]
    pub invoice_id: Option<String>,
    /// Counterparty EDRPOU code.
    #[serde(default)]
    pub counter_edrpou: Option<String>,
    /// Counterparty IBAN.
    #[serde(default)]
    pub counter_iban: Option<String>,
    /// Counterparty name.
    #[serde(default)]
    pub counter_name: Option<String>,
}

impl Transaction {
    /// Returns `true` if money came into the account.
    #[inline]
    #[must_use]
    pub const fn is_debit(&self) -> bool {
        self.amount > 0
    }

    /// Returns `true` if money left the account.
    #[inline]
    #[must_use]
    pub const fn is_credit(&self) -> bool {
        self.amount < 0
    }

    /// Returns `true` if `other` booked the exact opposite amount at the
    /// same second.
    ///
    /// The relation is symmetric and holds for an entry against itself
    /// when its amount is zero.
    #[inline]
    #[must_use]
    pub fn mirrors(&self, other: &Self) -> bool {
        self.time == other.time && other.amount.checked_neg() == Some(self.amount)
    }

    /// Booking time as a UTC timestamp, `None` if out of range.
    #[inline]
    #[must_use]
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}
