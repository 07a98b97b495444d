// src/main.rs
use ticket_hub::adapter::{cli, TicketHubApp};
use ticket_hub::config::Config;
use ticket_hub::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting ticket_hub v{}", env!("CARGO_PKG_VERSION"));

    let mut app = TicketHubApp::from_config(&config)?;

    // Form values come from a JSON file, or stdin when no path (or "-") is given
    let path = std::env::args().nth(1);
    let code = cli::run(
        &mut app,
        path.as_deref(),
        std::io::stdin(),
        &mut std::io::stderr(),
    )
    .await?;

    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
