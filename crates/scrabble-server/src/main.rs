//! Binary entrypoint for the Scrabble word HTTP server.
//!
//! Configuration comes from environment variables, see
//! [`scrabble_server::config`]. A missing or malformed dictionary stops the
//! process before it binds; the server never runs with a partial word list.

use std::process;

use scrabble_server::config::ServerConfig;
use scrabble_server::router::build_router;
use scrabble_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Error loading words dictionary: {}", e);
            process::exit(1);
        }
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };
    tracing::info!("Scrabble API server running on {}", addr);
    tracing::info!("Example: http://localhost:{}/search/hello", config.port);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        process::exit(1);
    }
}
