use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stocklens_aggregation::FilterError;
use stocklens_store::StoreError;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Unavailable(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "store_unavailable", msg)
        }
        StoreError::Unauthorized(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "store_unauthorized", msg)
        }
        StoreError::MalformedQuery(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "malformed_query", msg)
        }
        StoreError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        StoreError::MalformedResult(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "malformed_result", msg)
        }
        StoreError::Api { status, message } => json_error(
            StatusCode::BAD_GATEWAY,
            "store_error",
            format!("upstream status {status}: {message}"),
        ),
    }
}

pub fn filter_error_to_response(err: FilterError) -> axum::response::Response {
    match err {
        FilterError::InvalidFilterMode(mode) => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_filter",
            format!("unknown filter mode: {mode} (expected all, low, out, high)"),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
