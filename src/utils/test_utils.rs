//! Test utilities for account scan tests
//!
//! Provides an in-memory ledger that serves fixture pages and records what was asked.

#[cfg(test)]
use crate::handlers::accounts::enrich::RawAccount;

#[cfg(test)]
use crate::handlers::accounts::ledger_api::{
    AccountSource, AccountsPage, LedgerApiError, SortField,
};

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
pub fn raw_account(
    account_identifier: &str,
    balance: &str,
    transaction_count: &str,
    updated_at: i64,
) -> RawAccount {
    RawAccount {
        account_identifier: account_identifier.to_string(),
        balance: balance.to_string(),
        transaction_count: transaction_count.to_string(),
        updated_at,
    }
}

#[cfg(test)]
enum FixturePage {
    Accounts(Vec<RawAccount>),
    Error { status: u16, body: String },
}

/// Serves pages in order: page `n` answers offset `n * limit`
///
/// Offsets past the last fixture page get an empty page. The same pages are served
/// whatever sort field is requested.
#[cfg(test)]
#[derive(Default)]
pub struct FixtureSource {
    pages: Vec<FixturePage>,
    requests: Mutex<Vec<(SortField, usize)>>,
}

#[cfg(test)]
impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, accounts: Vec<RawAccount>) -> Self {
        self.pages.push(FixturePage::Accounts(accounts));
        self
    }

    pub fn with_error(mut self, status: u16, body: &str) -> Self {
        self.pages.push(FixturePage::Error {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn requested_offsets(&self) -> Vec<usize> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, offset)| *offset)
            .collect()
    }

    pub fn requested_sorts(&self) -> Vec<SortField> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(sort, _)| *sort)
            .collect()
    }
}

#[cfg(test)]
impl AccountSource for FixtureSource {
    async fn fetch_page(
        &self,
        sort: SortField,
        offset: usize,
        limit: usize,
    ) -> Result<AccountsPage, LedgerApiError> {
        self.requests.lock().unwrap().push((sort, offset));

        let index = if limit == 0 { 0 } else { offset / limit };
        let total = self
            .pages
            .iter()
            .map(|page| match page {
                FixturePage::Accounts(accounts) => accounts.len() as u64,
                FixturePage::Error { .. } => 0,
            })
            .sum();

        match self.pages.get(index) {
            Some(FixturePage::Accounts(accounts)) => Ok(AccountsPage {
                total,
                accounts: accounts.clone(),
            }),
            Some(FixturePage::Error { status, body }) => Err(LedgerApiError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(AccountsPage {
                total,
                accounts: Vec::new(),
            }),
        }
    }
}
