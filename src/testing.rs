//! Shared fixtures for unit tests.

use core::future::{self, Future};
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::api::BankApi;
use crate::error::{DashboardError, Result};
use crate::models::{
    Account, AccountId, AccountType, ClientId, ClientInfo, CurrencyCode, StatementWindow,
    Transaction, TransactionId,
};

/// Client payload with a black card and a white card.
pub(crate) const CLIENT_JSON: &str = r#"{
    "clientId": "3MSaMMtczs",
    "name": "First Client",
    "webHookUrl": "",
    "permissions": "psfj",
    "accounts": [
        {
            "id": "black-1",
            "sendId": "",
            "balance": 500,
            "creditLimit": 0,
            "type": "black",
            "currencyCode": 980,
            "maskedPan": [],
            "iban": ""
        },
        {
            "id": "white-1",
            "sendId": "uHWzqVoZuH",
            "balance": 150050,
            "creditLimit": 0,
            "type": "white",
            "currencyCode": 980,
            "cashbackType": "UAH",
            "maskedPan": ["537541******1234"],
            "iban": "UA733220010000026201234567890"
        }
    ],
    "jars": []
}"#;

/// Statement payload with one payment and one top-up.
pub(crate) const STATEMENT_JSON: &str = r#"[
    {
        "id": "tx-1",
        "time": 1699990000,
        "description": "Coffee",
        "mcc": 5814,
        "originalMcc": 5814,
        "hold": false,
        "amount": -9500,
        "operationAmount": -9500,
        "currencyCode": 980,
        "commissionRate": 0,
        "cashbackAmount": 95,
        "balance": 140550
    },
    {
        "id": "tx-2",
        "time": 1699980000,
        "description": "Salary",
        "mcc": 4829,
        "originalMcc": 4829,
        "hold": false,
        "amount": 100000,
        "operationAmount": 100000,
        "currencyCode": 980,
        "commissionRate": 0,
        "cashbackAmount": 0,
        "balance": 150050
    }
]"#;

/// Builds a transaction with the fields the dashboard looks at.
pub(crate) fn transaction(id: &str, amount: i64, time: i64) -> Transaction {
    Transaction {
        id: TransactionId::from(id),
        time,
        description: format!("provider {id}"),
        mcc: 0,
        original_mcc: 0,
        hold: false,
        amount,
        operation_amount: amount,
        currency_code: CurrencyCode::new(980),
        commission_rate: 0,
        cashback_amount: 0,
        balance: 0,
        comment: None,
        receipt_id: None,
        invoice_id: None,
        counter_edrpou: None,
        counter_iban: None,
        counter_name: None,
    }
}

/// Builds a transaction carrying cashback.
pub(crate) fn with_cashback(mut tx: Transaction, cashback: i64) -> Transaction {
    tx.cashback_amount = cashback;
    tx
}

/// Builds an account of the given kind and balance.
pub(crate) fn account(id: &str, kind: AccountType, balance: i64) -> Account {
    Account {
        id: AccountId::from(id),
        send_id: String::new(),
        balance,
        credit_limit: 0,
        kind,
        currency_code: CurrencyCode::new(980),
        cashback_type: None,
        masked_pan: Vec::new(),
        iban: String::new(),
    }
}

/// Builds a client profile holding `accounts`.
pub(crate) fn client_info(name: &str, accounts: Vec<Account>) -> ClientInfo {
    ClientInfo {
        client_id: ClientId::from(name),
        name: name.to_owned(),
        web_hook_url: String::new(),
        permissions: String::new(),
        accounts,
        jars: Vec::new(),
    }
}

/// In-memory [`BankApi`] that counts statement requests.
#[derive(Debug)]
pub(crate) struct StubBank {
    /// Profile returned by `client_info`, `None` to fail the call.
    client: Option<ClientInfo>,
    /// Statement returned for any account, `None` to fail the call.
    history: Option<Vec<Transaction>>,
    /// Number of statement requests seen.
    statement_calls: AtomicUsize,
}

impl StubBank {
    /// Creates a stub answering both calls successfully.
    pub(crate) const fn new(client: ClientInfo, history: Vec<Transaction>) -> Self {
        Self {
            client: Some(client),
            history: Some(history),
            statement_calls: AtomicUsize::new(0),
        }
    }

    /// Creates a stub whose client-info call fails.
    pub(crate) const fn failing_client_info() -> Self {
        Self {
            client: None,
            history: None,
            statement_calls: AtomicUsize::new(0),
        }
    }

    /// Creates a stub whose statement call fails.
    pub(crate) const fn failing_statement(client: ClientInfo) -> Self {
        Self {
            client: Some(client),
            history: None,
            statement_calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many statements were requested.
    pub(crate) fn statement_calls(&self) -> usize {
        self.statement_calls.load(Ordering::SeqCst)
    }
}

/// Error returned by failing stub calls.
fn upstream_error() -> DashboardError {
    DashboardError::Api {
        status: 429,
        message: "Too many requests".to_owned(),
    }
}

impl BankApi for StubBank {
    fn client_info(&self) -> impl Future<Output = Result<ClientInfo>> + Send {
        future::ready(self.client.clone().ok_or_else(upstream_error))
    }

    fn statement(
        &self,
        _account: &AccountId,
        _window: StatementWindow,
    ) -> impl Future<Output = Result<Vec<Transaction>>> + Send {
        let _previous = self.statement_calls.fetch_add(1, Ordering::SeqCst);
        future::ready(self.history.clone().ok_or_else(upstream_error))
    }
}
