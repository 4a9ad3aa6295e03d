use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use featurethon_bot::config::Config;
use featurethon_bot::digest::Flair;
use featurethon_bot::notify::Notifier;
use featurethon_bot::rules::EventRules;
use featurethon_bot::server::{AppState, build_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "featurethon_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let notifier = match Notifier::new(config.messaging_url) {
        Ok(notifier) => notifier,
        Err(e) => {
            tracing::error!("failed to build notifier: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(EventRules::fall_2025(), Flair::default(), notifier);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
