//! Ledger API Client
//!
//! Fetches one page of accounts from the public ledger-query service:
//! `GET <base>/accounts?limit=<n>&sort_by=<-field>&offset=<n>`

use serde::Deserialize;
use thiserror::Error;

use super::enrich::RawAccount;

/// Remote sort order; both are descending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    TransactionCount,
    Balance,
}

impl SortField {
    pub fn as_query(&self) -> &'static str {
        match self {
            SortField::TransactionCount => "-transaction_count",
            SortField::Balance => "-balance",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::TransactionCount => write!(f, "transaction_count"),
            SortField::Balance => write!(f, "balance"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LedgerApiError {
    #[error("Request to ledger API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ledger API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode ledger API response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone)]
pub struct AccountsPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub accounts: Vec<RawAccount>,
}

/// A paginated collection of accounts sorted descending by the requested field
#[allow(async_fn_in_trait)]
pub trait AccountSource {
    async fn fetch_page(
        &self,
        sort: SortField,
        offset: usize,
        limit: usize,
    ) -> Result<AccountsPage, LedgerApiError>;
}

pub struct LedgerApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LedgerApiClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    pub fn page_url(&self, sort: SortField, offset: usize, limit: usize) -> String {
        format!(
            "{}/accounts?limit={}&sort_by={}&offset={}",
            self.base_url,
            limit,
            sort.as_query(),
            offset
        )
    }
}

impl AccountSource for LedgerApiClient {
    async fn fetch_page(
        &self,
        sort: SortField,
        offset: usize,
        limit: usize,
    ) -> Result<AccountsPage, LedgerApiError> {
        let url = self.page_url(sort, offset, limit);
        log::debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LedgerApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Read the body first so transport and decode failures stay distinct
        let body = response.text().await?;
        let page: AccountsPage = serde_json::from_str(&body)?;

        Ok(page)
    }
}
