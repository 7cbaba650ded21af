use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordlebot::{Config, DiscordChatClient, SummaryService};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordlebot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wordle recap run");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let client = match DiscordChatClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            error!(%err, "Failed to build chat client");
            std::process::exit(1);
        }
    };

    let service = SummaryService::new(client.clone(), client, config.run_deadline);

    match service.run(Utc::now()).await {
        Ok(content) => {
            info!(length = content.len(), "Recap published");
        }
        Err(err) => {
            error!(%err, "Recap run failed");
            std::process::exit(1);
        }
    }
}
