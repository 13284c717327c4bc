pub mod known_accounts;

pub const DEFAULT_LEDGER_API_BASE: &str = "https://ledger-api.internetcomputer.org";
pub const DEFAULT_ACCOUNTS_FILE_PATH: &str = "accounts.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const PAGE_SIZE: usize = 50;
pub const PAGE_DELAY_MS: u64 = 100;

pub const MIN_TRANSACTION_COUNT: u64 = 10_000;
pub const MIN_BALANCE_UNITS: u64 = 250_000;

pub const ACTIVE_WINDOW_SECS: i64 = 60 * 60 * 24 * 30; // 30 days

/// Ledger balances are fixed-point with 8 decimals (1 coin = 10^8 subunits)
pub const SUBUNIT_DECIMALS: i64 = 8;
