use crate::storage::catalog::CatalogStore;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Arc<RwLock<CatalogStore>>,
}

impl AppState {
    /// Fresh state with an empty catalog. Constructed once in `main` and
    /// per test; nothing in the crate reaches for a hidden global.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(RwLock::new(CatalogStore::new())),
        }
    }
}

/// Body of `POST /products`.
///
/// Fields bind as raw JSON values; the handler coerces scalars itself
/// (a bare `true` or `42` arriving in `name` binds as the text `"true"` /
/// `"42"`) instead of letting serde reject the body. See `handlers::common`.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<JsonValue>,
    #[serde(default, rename = "type")]
    #[schema(value_type = Option<String>)]
    pub product_type: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub inventory: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub cost: Option<JsonValue>,
}

/// Query string of `GET /products`.
#[derive(Deserialize, Debug, Default)]
pub struct ListParams {
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
}

/// `201` payload: the id assigned to the created product.
#[derive(Serialize, Debug, ToSchema)]
pub struct ProductCreated {
    pub id: u32,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    pub products: usize,
    pub checked_at: String,
}
