//! Client profile model.

use serde::{Deserialize, Serialize};

use super::{Account, ClientId, Jar};

/// A bank client profile as returned by `/personal/client-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client identifier.
    pub client_id: ClientId,
    /// Client display name.
    pub name: String,
    /// Registered webhook URL, empty when none is set.
    #[serde(default)]
    pub web_hook_url: String,
    /// Permission flags granted to the token.
    #[serde(default)]
    pub permissions: String,
    /// Card accounts, in API order.
    pub accounts: Vec<Account>,
    /// Savings jars.
    #[serde(default)]
    pub jars: Vec<Jar>,
}

impl ClientInfo {
    /// Returns the first white card account, if the client has one.
    #[inline]
    #[must_use]
    pub fn white_card(&self) -> Option<&Account> {
        self.accounts.iter().find(|account| account.is_white())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, AccountType, CashbackType};

    /// Client payload with a black card listed before two white cards.
    const CLIENT_JSON: &str = r#"{
        "clientId": "3MSaMMtczs",
        "name": "Test Client",
        "webHookUrl": "",
        "permissions": "psfj",
        "accounts": [
            {
                "id": "black-1",
                "sendId": "",
                "balance": 100,
                "creditLimit": 0,
                "type": "black",
                "currencyCode": 980,
                "maskedPan": [],
                "iban": ""
            },
            {
                "id": "white-1",
                "sendId": "",
                "balance": 200,
                "creditLimit": 0,
                "type": "white",
                "currencyCode": 980,
                "maskedPan": [],
                "iban": ""
            },
            {
                "id": "white-2",
                "sendId": "",
                "balance": 300,
                "creditLimit": 0,
                "type": "white",
                "currencyCode": 980,
                "maskedPan": [],
                "iban": ""
            }
        ]
    }"#;

    #[test]
    fn deserialize_client_without_jars() {
        let client: ClientInfo = serde_json::from_str(CLIENT_JSON).unwrap();
        assert_eq!(client.client_id, ClientId::from("3MSaMMtczs"));
        assert_eq!(client.accounts.len(), 3);
        assert!(client.jars.is_empty());
    }

    #[test]
    fn white_card_picks_first_white_account() {
        let client: ClientInfo = serde_json::from_str(CLIENT_JSON).unwrap();
        let card = client.white_card().unwrap();
        assert_eq!(card.id, AccountId::from("white-1"));
        assert_eq!(card.kind, AccountType::White);
    }

    #[test]
    fn white_card_absent() {
        let mut client: ClientInfo = serde_json::from_str(CLIENT_JSON).unwrap();
        client.accounts.retain(|account| !account.is_white());
        assert!(client.white_card().is_none());
    }

    #[test]
    fn white_card_on_empty_account_list() {
        let mut client: ClientInfo = serde_json::from_str(CLIENT_JSON).unwrap();
        client.accounts.clear();
        assert!(client.white_card().is_none());
    }

    #[test]
    fn white_card_found_among_untracked_cards_and_programs() {
        let json = r#"{
            "clientId": "3MSaMMtczs",
            "name": "Test Client",
            "accounts": [
                {
                    "id": "black-1",
                    "sendId": "",
                    "balance": 100,
                    "creditLimit": 0,
                    "type": "black",
                    "currencyCode": 980,
                    "cashbackType": "None",
                    "iban": ""
                },
                {
                    "id": "platinum-1",
                    "sendId": "",
                    "balance": 500,
                    "creditLimit": 0,
                    "type": "platinum",
                    "currencyCode": 840,
                    "cashbackType": "Miles",
                    "iban": ""
                },
                {
                    "id": "white-1",
                    "sendId": "",
                    "balance": 200,
                    "creditLimit": 0,
                    "type": "white",
                    "currencyCode": 980,
                    "cashbackType": "UAH",
                    "iban": ""
                }
            ]
        }"#;
        let client: ClientInfo = serde_json::from_str(json).unwrap();
        assert_eq!(client.accounts[0].cashback_type, Some(CashbackType::Disabled));
        assert_eq!(client.accounts[1].kind, AccountType::Other);
        assert_eq!(client.accounts[1].cashback_type, Some(CashbackType::Miles));
        assert_eq!(
            client.white_card().unwrap().id,
            AccountId::from("white-1")
        );
    }
}
