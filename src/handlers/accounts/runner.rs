use std::path::Path;

use super::aggregate::ResultSet;
use super::enrich::AccountEnricher;
use super::ledger_api::AccountSource;
use super::scanner::{PaginatedScanner, ScanCriterion, ScanReport};
use super::snapshot::{SnapshotError, write_snapshot};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub transaction_count: ScanCriterion,
    /// `None` skips the balance scan
    pub balance: Option<ScanCriterion>,
}

impl RunOptions {
    pub fn new(enable_large_balance: bool) -> Self {
        Self {
            transaction_count: ScanCriterion::default_transaction_count(),
            balance: enable_large_balance.then(ScanCriterion::default_balance),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub accounts: ResultSet,
    pub scans: Vec<ScanReport>,
}

impl RunSummary {
    pub fn accounts_found(&self) -> usize {
        self.accounts.len()
    }
}

/// Run the transaction-count scan, then the balance scan when enabled, merging
/// each into one result set in that order
pub async fn discover_accounts<S: AccountSource>(
    scanner: &PaginatedScanner<'_, S>,
    options: &RunOptions,
    now: i64,
) -> RunSummary {
    let mut accounts = ResultSet::new();
    let mut scans = Vec::new();

    let criteria = std::iter::once(&options.transaction_count).chain(options.balance.as_ref());
    for criterion in criteria {
        let report = scanner.scan(criterion, now).await;
        accounts.merge(report.accounts.iter().cloned());
        scans.push(report);
    }

    RunSummary { accounts, scans }
}

/// Full run: discover accounts and write the snapshot to `output`
///
/// Fetch failures only shorten the affected scan. A snapshot failure is logged and
/// returned alongside the summary; neither aborts the run.
pub async fn run_discovery<S: AccountSource>(
    source: &S,
    enricher: &AccountEnricher,
    options: &RunOptions,
    output: &Path,
    now: i64,
) -> (RunSummary, Result<(), SnapshotError>) {
    let scanner = PaginatedScanner::new(source, enricher);
    let summary = discover_accounts(&scanner, options, now).await;

    let written = write_snapshot(output, &summary.accounts);
    if let Err(e) = &written {
        log::error!("Failed to write snapshot: {}", e);
    }

    (summary, written)
}
