//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: dashboard service (fan-out fetch + last-good snapshot)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use stocklens_store::CatalogSource;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The catalog source is injected by the caller: the production binary passes
/// a GROQ-backed source, tests pass an in-memory one.
pub fn build_app(source: Arc<dyn CatalogSource>) -> Router {
    let services = Arc::new(services::AppServices::new(source));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
