mod config;
mod controller;
mod error;
mod media;
mod navigation;
mod pages;
mod provider;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid");
            std::process::exit(1);
        }
    };

    let auth = match provider::GoTrueClient::new(&config.supabase) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "auth client init failed");
            std::process::exit(1);
        }
    };

    // Game endpoints answer 503 without a key.
    let media = match config.rawg_api_key.clone().map(media::RawgClient::new).transpose() {
        Ok(Some(client)) => {
            tracing::info!("games catalogue enabled");
            Some(client)
        }
        Ok(None) => {
            tracing::warn!("RAWG_API_KEY not set; games catalogue disabled");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "games catalogue init failed; disabled");
            None
        }
    };

    let addr = config.bind_addr();
    let state = state::AppState::new(config, auth, media);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "logari listening");
    axum::serve(listener, app).await.expect("server failed");
}
