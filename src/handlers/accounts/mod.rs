pub mod aggregate;
pub mod enrich;
pub mod ledger_api;
pub mod numeric;
pub mod runner;
pub mod scanner;
pub mod snapshot;
