use std::sync::Arc;

use redis::Client;
use taskmate::{app, TaskStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taskmate=info,tower_http=info")),
        )
        .init();

    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let client = Client::open(redis_url.as_str()).expect("invalid redis URL");
    let store = TaskStore::new(Arc::new(client));

    // A dead store is logged, not fatal; requests fail with 500 until
    // redis comes back.
    match store.ping().await {
        Ok(()) => tracing::info!(%redis_url, "database connected"),
        Err(err) => tracing::error!(%err, %redis_url, "database connection failed"),
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind port");
    tracing::info!("server running on http://localhost:{port}");
    axum::serve(listener, app(store))
        .await
        .expect("server error");
}
