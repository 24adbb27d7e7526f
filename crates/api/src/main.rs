use std::sync::Arc;

use stocklens_store::{GroqCatalog, HttpContentStore, StoreConfig};

#[tokio::main]
async fn main() {
    stocklens_observability::init();

    let config = StoreConfig::from_env().expect("store configuration");
    let store = HttpContentStore::new(config).expect("store client");
    let source = Arc::new(GroqCatalog::new(store));

    let app = stocklens_api::app::build_app(source);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        tracing::warn!("BIND_ADDR not set; using 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
