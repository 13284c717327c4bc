use crate::constants::{
    DEFAULT_ACCOUNTS_FILE_PATH, DEFAULT_LEDGER_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS,
};

#[derive(Clone, Debug)]
pub struct EnvVars {
    pub ledger_api_base: String,
    pub accounts_file_path: String,
    pub request_timeout_secs: u64,
}

impl Default for EnvVars {
    fn default() -> Self {
        Self {
            ledger_api_base: std::env::var("LEDGER_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_LEDGER_API_BASE.to_string()),
            accounts_file_path: std::env::var("ACCOUNTS_FILE_PATH")
                .unwrap_or_else(|_| DEFAULT_ACCOUNTS_FILE_PATH.to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
