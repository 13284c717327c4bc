//! Paginated Account Scanner
//!
//! Walks the ledger's account listing page by page, sorted descending by one field,
//! and keeps accounts while that field stays strictly above a threshold.
//!
//! # Precondition
//!
//! The remote service is trusted to return accounts sorted descending by the
//! requested field across all pages. The scan stops at the first account that fails
//! the threshold and never looks further, so an out-of-order page would silently hide
//! accounts past that point.

use bigdecimal::BigDecimal;
use std::time::Duration;

use super::enrich::{Account, AccountEnricher};
use super::ledger_api::{AccountSource, SortField};
use crate::constants::{MIN_BALANCE_UNITS, MIN_TRANSACTION_COUNT, PAGE_DELAY_MS, PAGE_SIZE};

/// Which field to sort by and the exclusive lower bound it must exceed
#[derive(Debug, Clone)]
pub struct ScanCriterion {
    pub field: SortField,
    pub threshold: BigDecimal,
}

impl ScanCriterion {
    pub fn transaction_count_above(threshold: impl Into<BigDecimal>) -> Self {
        Self {
            field: SortField::TransactionCount,
            threshold: threshold.into(),
        }
    }

    /// Threshold is in whole coins, not subunits
    pub fn balance_above(threshold: impl Into<BigDecimal>) -> Self {
        Self {
            field: SortField::Balance,
            threshold: threshold.into(),
        }
    }

    pub fn default_transaction_count() -> Self {
        Self::transaction_count_above(MIN_TRANSACTION_COUNT)
    }

    pub fn default_balance() -> Self {
        Self::balance_above(MIN_BALANCE_UNITS)
    }

    pub fn value_of(&self, account: &Account) -> BigDecimal {
        match self.field {
            SortField::TransactionCount => account.transaction_count(),
            SortField::Balance => account.balance_units(),
        }
    }

    pub fn accepts(&self, account: &Account) -> bool {
        self.value_of(account) > self.threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// An account at or below the threshold was reached
    ThresholdReached,
    /// The service returned an empty page
    Exhausted,
    /// A page request failed; accounts collected before it are kept
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub field: SortField,
    pub accounts: Vec<Account>,
    pub pages_fetched: usize,
    pub stop: StopReason,
}

pub struct PaginatedScanner<'a, S> {
    source: &'a S,
    enricher: &'a AccountEnricher,
    page_size: usize,
    page_delay: Duration,
}

impl<'a, S: AccountSource> PaginatedScanner<'a, S> {
    pub fn new(source: &'a S, enricher: &'a AccountEnricher) -> Self {
        Self {
            source,
            enricher,
            page_size: PAGE_SIZE,
            page_delay: Duration::from_millis(PAGE_DELAY_MS),
        }
    }

    /// A page size of 0 is raised to 1 so the offset always advances
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Run one scan for `criterion`, enriching accounts as seen at `now`
    ///
    /// Never fails: fetch errors end the scan early and are reported in the
    /// returned `StopReason`.
    pub async fn scan(&self, criterion: &ScanCriterion, now: i64) -> ScanReport {
        let mut accounts = Vec::new();
        let mut pages_fetched = 0;
        let mut offset = 0;

        log::info!(
            "Scanning accounts by {} above {}",
            criterion.field,
            criterion.threshold
        );

        let stop = loop {
            let page = match self
                .source
                .fetch_page(criterion.field, offset, self.page_size)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    log::error!(
                        "Failed to fetch {} page at offset {}: {}",
                        criterion.field,
                        offset,
                        e
                    );
                    break StopReason::Failed(e.to_string());
                }
            };
            pages_fetched += 1;

            log::debug!(
                "Fetched {} accounts at offset {} (total {})",
                page.accounts.len(),
                offset,
                page.total
            );

            if page.accounts.is_empty() {
                break StopReason::Exhausted;
            }

            let mut below_threshold = false;
            for raw in &page.accounts {
                let account = self.enricher.enrich(raw, now);
                if !criterion.accepts(&account) {
                    below_threshold = true;
                    break;
                }
                accounts.push(account);
            }

            if below_threshold {
                break StopReason::ThresholdReached;
            }

            offset += self.page_size;
            tokio::time::sleep(self.page_delay).await;
        };

        log::info!(
            "Scan by {} stopped ({:?}) after {} pages with {} accounts",
            criterion.field,
            stop,
            pages_fetched,
            accounts.len()
        );

        ScanReport {
            field: criterion.field,
            accounts,
            pages_fetched,
            stop,
        }
    }
}
