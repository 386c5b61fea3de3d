mod routes;
mod state;

use records::config::AirtableConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Missing Airtable settings are non-fatal: reads fail until they are set.
    let config = AirtableConfig::from_env();
    let missing = config.missing_vars();
    if missing.is_empty() {
        tracing::info!(
            url = config.url.as_deref().unwrap_or_default(),
            max_retries = config.max_retries,
            "airtable source configured"
        );
    } else {
        tracing::warn!(?missing, "airtable source not fully configured; record reads will fail");
    }

    let state = state::AppState::from_config(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "screenshelf listening");
    axum::serve(listener, app).await.expect("server failed");
}
