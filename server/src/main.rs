mod config;
mod csrf;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;

    // Pages still render without an upstream; only /predict/ degrades.
    match config.predict_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "prediction proxy enabled"),
        None => tracing::warn!("PREDICT_UPSTREAM_URL not set; /predict/ will answer 503"),
    }

    let state = state::AppState::new(config).expect("HTTP client init failed");
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "telemed listening");
    axum::serve(listener, app).await.expect("server failed");
}
