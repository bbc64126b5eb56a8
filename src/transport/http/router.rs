use crate::domain::product::{Product, ProductType};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    AppState, CreateProductRequest, ErrorResponse, HealthResponse, ProductCreated,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::create_product_handler
    ),
    components(schemas(
        Product,
        ProductType,
        CreateProductRequest,
        ProductCreated,
        ErrorResponse,
        HealthResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .with_state(app_state)
}
