//! Enumeration types for constrained API values.

use serde::{Deserialize, Serialize};

/// Card type of an account.
///
/// Card types the dashboard does not track (`platinum`, `iron`, `fop` and
/// newer ones) all parse as [`AccountType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Black (credit) card.
    Black,
    /// White (debit) card, the one shown on the dashboard.
    White,
    /// Any other card type.
    #[serde(other)]
    Other,
}

/// Currency or program in which cashback is accrued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CashbackType {
    /// No cashback on this account.
    #[serde(rename = "None")]
    Disabled,
    /// Ukrainian hryvnia.
    Uah,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Russian ruble.
    Rub,
    /// Airline miles.
    #[serde(rename = "Miles")]
    Miles,
    /// Any other cashback program.
    #[serde(other)]
    Other,
}
