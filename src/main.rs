use clap::Parser;
use ledger_accounts::handlers::accounts::runner::{RunOptions, run_discovery};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    name = "ledger-accounts",
    version,
    about = "Find busy and wealthy ledger accounts"
)]
struct Cli {
    /// Also add accounts with large balances
    #[arg(long)]
    enable_large_balance: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let args = Cli::parse();

    let state = ledger_accounts::init_app_state()?;
    let source = state.ledger_client();
    let enricher = state.enricher();
    let options = RunOptions::new(args.enable_large_balance);
    let now = chrono::Utc::now().timestamp();

    let (summary, _written) = run_discovery(
        &source,
        &enricher,
        &options,
        Path::new(&state.env_vars.accounts_file_path),
        now,
    )
    .await;

    // Printed after the snapshot attempt; the count is the merged set either way
    println!(
        "Found {} accounts matching parameters.",
        summary.accounts_found()
    );

    Ok(())
}
