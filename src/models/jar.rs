//! Savings jar model.

use serde::{Deserialize, Serialize};

use super::{CurrencyCode, JarId};

/// A savings jar attached to a client profile.
///
/// Jars are parsed with the client payload but take no part in the
/// dashboard totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jar {
    /// Jar identifier.
    pub id: JarId,
    /// Identifier used for "send money" links.
    #[serde(default)]
    pub send_id: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Jar currency.
    #[serde(default)]
    pub currency_code: Option<CurrencyCode>,
    /// Saved amount in minor units.
    #[serde(default)]
    pub balance: Option<i64>,
    /// Savings goal in minor units.
    #[serde(default)]
    pub goal: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_jar() {
        let json = r#"{
            "id": "jar-1",
            "sendId": "jar/abc",
            "title": "Vacation",
            "description": "",
            "currencyCode": 980,
            "balance": 250000,
            "goal": 1000000
        }"#;
        let jar: Jar = serde_json::from_str(json).unwrap();
        assert_eq!(jar.id, JarId::from("jar-1"));
        assert_eq!(jar.title.as_deref(), Some("Vacation"));
        assert_eq!(jar.goal, Some(1_000_000));
    }

    #[test]
    fn deserialize_bare_jar() {
        let jar: Jar = serde_json::from_str(r#"{"id": "jar-2"}"#).unwrap();
        assert_eq!(jar.balance, None);
        assert_eq!(jar.currency_code, None);
    }
}
