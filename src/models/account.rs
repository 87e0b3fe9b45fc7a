//! Card account model.

use serde::{Deserialize, Serialize};

use super::{AccountId, AccountType, CashbackType, CurrencyCode};

/// One card account under a client profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier, used in statement requests.
    pub id: AccountId,
    /// Identifier used for "send money" links.
    pub send_id: String,
    /// Current balance in minor units.
    pub balance: i64,
    /// Credit limit in minor units.
    pub credit_limit: i64,
    /// Card type.
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// Account currency.
    pub currency_code: CurrencyCode,
    /// Cashback currency, absent for accounts without cashback.
    #[serde(default)]
    pub cashback_type: Option<CashbackType>,
    /// Masked card numbers issued for this account.
    #[serde(default)]
    pub masked_pan: Vec<String>,
    /// Account IBAN.
    pub iban: String,
}

impl Account {
    /// Returns `true` for the white card shown on the dashboard.
    #[inline]
    #[must_use]
    pub const fn is_white(&self) -> bool {
        matches!(self.kind, AccountType::White)
    }
}
