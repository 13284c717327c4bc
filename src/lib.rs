pub mod constants;
pub mod handlers;
pub mod utils;

use handlers::accounts::enrich::{AccountEnricher, NameTable};
use handlers::accounts::ledger_api::LedgerApiClient;
use std::time::Duration;

pub struct AppState {
    pub http_client: reqwest::Client,
    pub names: NameTable,
    pub env_vars: utils::env::EnvVars,
}

impl AppState {
    pub fn ledger_client(&self) -> LedgerApiClient {
        LedgerApiClient::new(self.http_client.clone(), &self.env_vars.ledger_api_base)
    }

    pub fn enricher(&self) -> AccountEnricher {
        AccountEnricher::new(self.names.clone())
    }
}

/// Initialize the application state with the HTTP client and name table
pub fn init_app_state() -> Result<AppState, Box<dyn std::error::Error>> {
    let env_vars = utils::env::EnvVars::default();

    log::info!("Using ledger API at {}", env_vars.ledger_api_base);

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(env_vars.request_timeout_secs))
        .build()?;

    let names = NameTable::known_exchanges();
    log::debug!("Loaded {} known account names", names.len());

    Ok(AppState {
        http_client,
        names,
        env_vars,
    })
}
