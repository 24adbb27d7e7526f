use axum::Router;

pub mod dashboard;
pub mod products;
pub mod system;

/// Router for all catalog-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/dashboard", dashboard::router())
        .nest("/products", products::router())
}
