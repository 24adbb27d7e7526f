use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use stocklens_aggregation::FilterMode;
use stocklens_core::DocumentId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    filter: Option<String>,
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<ListParams>,
) -> axum::response::Response {
    let mode = match params.filter.as_deref().unwrap_or("all").parse::<FilterMode>() {
        Ok(mode) => mode,
        Err(e) => return errors::filter_error_to_response(e),
    };
    let predicate = mode.resolve();

    let source = services.source();
    let (products, total) = match tokio::try_join!(
        source.products(&predicate),
        source.count_products(&predicate),
    ) {
        Ok(fetched) => fetched,
        Err(e) => return errors::store_error_to_response(e),
    };

    let items: Vec<dto::ProductItem> = products.into_iter().map(dto::ProductItem::from).collect();
    (
        StatusCode::OK,
        Json(dto::ProductListResponse {
            filter: mode.as_str(),
            total,
            items,
        }),
    )
        .into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };

    match services.source().product_detail(&id).await {
        Ok(Some(detail)) => (
            StatusCode::OK,
            Json(dto::ProductDetailResponse::from(detail)),
        )
            .into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
