use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/refresh", post(refresh))
}

/// Last successfully computed snapshot. `no_data` means no refresh has
/// succeeded yet, which is distinct from a refresh failure.
pub async fn get_stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.latest_snapshot() {
        Some(timed) => (StatusCode::OK, Json(dto::StatsResponse::from(timed))).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "no_data",
            "no snapshot has been computed yet",
        ),
    }
}

/// Recompute the snapshot from the store. On failure the previous snapshot
/// is left undisturbed and the gateway error is reported as-is.
pub async fn refresh(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.refresh_snapshot().await {
        Ok(timed) => (StatusCode::OK, Json(dto::StatsResponse::from(timed))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "dashboard refresh failed");
            errors::store_error_to_response(e)
        }
    }
}
