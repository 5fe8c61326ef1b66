use anyhow::Result;

use taskdeck::api::{ApiClient, ApiConfig};
use taskdeck::config::Config;
use taskdeck::logger::init_file_logging;
use taskdeck::token::{TokenStore, TOKEN_ENV_VAR};
use taskdeck::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // `taskdeck init-config` writes a commented default config and exits
    if std::env::args().nth(1).as_deref() == Some("init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    let log_path = config.log_file_path()?;
    init_file_logging(&config.logging, &log_path)?;

    let token_store = TokenStore::default_location()?;
    let Some(token) = token_store.load()? else {
        eprintln!("Error: no API token found");
        eprintln!();
        eprintln!("To use this app:");
        eprintln!("1. Get a bearer token from your task-management backend");
        eprintln!(
            "2. Set it as environment variable: export {}=your_token_here",
            TOKEN_ENV_VAR
        );
        eprintln!("   or write it to {}", token_store.path().display());
        eprintln!("3. Run the app again");
        return Ok(());
    };

    let api_client = ApiClient::new(ApiConfig {
        base_url: config.api.base_url.clone(),
        token,
        timeout_secs: config.api.timeout_secs,
    })?;

    ui::run_app(api_client, &config).await?;

    Ok(())
}
