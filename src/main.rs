mod bot;
mod command;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing;

use crate::config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = dioxus_logger::init(tracing::Level::INFO);
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Bot stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), error::AppError> {
    let http_client = startup::setup_reqwest_client()?;
    let factory = startup::translator_factory(&config, http_client);
    let state = startup::build_state(&config, factory).await;

    tracing::info!(
        "Using {} with {}",
        config.provider.display_name(),
        match config.scope {
            config::RelayScope::Registry => "managed channels".to_string(),
            config::RelayScope::SingleChannel(id) => format!("channel {id}"),
        }
    );

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
