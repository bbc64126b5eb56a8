//! Product domain records.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// The fixed set of product types the catalog accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Book,
    Food,
    Gadget,
    Other,
}

impl ProductType {
    /// Parses the wire representation (`book`, `food`, `gadget`, `other`).
    /// Returns None for anything outside the enumeration.
    pub fn parse(value: &str) -> Option<ProductType> {
        match value {
            "book" => Some(ProductType::Book),
            "food" => Some(ProductType::Food),
            "gadget" => Some(ProductType::Gadget),
            "other" => Some(ProductType::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Book => "book",
            ProductType::Food => "food",
            ProductType::Gadget => "gadget",
            ProductType::Other => "other",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog record. Immutable once created; the id is assigned by the store.
///
/// `inventory` keeps whatever JSON number the client sent (the catalog does
/// not commit to integer-only counts), so it is held as a raw number rather
/// than a fixed numeric type.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[schema(value_type = f64)]
    pub inventory: Number,
    pub cost: f64,
}

/// An unvalidated creation request, as bound from the wire. Any field may
/// be absent; [`ProductSubmission::validate`] turns it into a [`NewProduct`].
#[derive(Debug, Clone, Default)]
pub struct ProductSubmission {
    pub name: Option<String>,
    pub product_type: Option<String>,
    pub inventory: Option<Number>,
    pub cost: Option<f64>,
}

/// A submission that passed validation; the only thing
/// [`CatalogStore::create`](crate::storage::catalog::CatalogStore::create) accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub product_type: ProductType,
    pub inventory: Number,
    pub cost: f64,
}
