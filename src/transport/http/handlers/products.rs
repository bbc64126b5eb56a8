use crate::domain::product::{Product, ProductType};
use crate::transport::http::handlers::common::submission_from_request;
use crate::transport::http::types::{
    AppState, CreateProductRequest, ErrorResponse, ListParams, ProductCreated,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, info};

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("type" = Option<String>, Query, description = "Restrict the listing to one product type (book, food, gadget, other)")
    ),
    responses(
        (status = 200, description = "Products in creation order", body = [Product]),
        (status = 400, description = "Unknown product type", body = ErrorResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    // Reject unknown filter values here; the store does not re-check them.
    let filter = match params.product_type.as_deref() {
        None => None,
        Some(raw) => match ProductType::parse(raw) {
            Some(t) => Some(t),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "Invalid product type".to_string(),
                    }),
                )
                    .into_response();
            }
        },
    };

    let catalog = state.catalog.read().await;
    let products = catalog.list(filter);
    debug!(count = products.len(), "served product listing");
    (StatusCode::OK, Json(products)).into_response()
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, description = "Invalid product data", body = ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateProductRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "rejected unreadable product body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid product data".to_string(),
                }),
            )
                .into_response();
        }
    };

    let submission = submission_from_request(&request);
    let new_product = match submission.validate() {
        Ok(v) => v,
        Err(err) => {
            let message = if err.is_missing() {
                "Invalid product data: null value not allowed"
            } else {
                "Invalid product data"
            };
            debug!(reason = %err, "rejected product submission");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
                .into_response();
        }
    };

    // Write lock spans the id computation and the insert.
    let mut catalog = state.catalog.write().await;
    let product = catalog.create(new_product);
    info!(id = product.id, product_type = %product.product_type, "created product");
    (StatusCode::CREATED, Json(ProductCreated { id: product.id })).into_response()
}
