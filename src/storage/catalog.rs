//! In-memory catalog store.

use std::collections::BTreeMap;

use crate::domain::product::{NewProduct, Product, ProductType};

/// Ordered map of product id to product. Ids are dense (`len() + 1` at the
/// moment of insertion) and nothing is ever removed, so iterating the map in
/// key order is exactly insertion order.
///
/// The store does no locking of its own. Handlers share it behind
/// `Arc<RwLock<_>>`; `create` must run under the write lock so the size read
/// and the insert form one critical section, otherwise two writers can
/// compute the same id.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: BTreeMap<u32, Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
        }
    }

    /// Assigns the next id, inserts the product, and returns the stored
    /// record. Expects an already-validated submission.
    pub fn create(&mut self, new: NewProduct) -> Product {
        let id = self.products.len() as u32 + 1;
        let product = Product {
            id,
            name: new.name,
            product_type: new.product_type,
            inventory: new.inventory,
            cost: new.cost,
        };
        self.products.insert(id, product.clone());
        product
    }

    /// Products in insertion order, optionally restricted to a single type.
    /// Returns an empty vec (never an error) when nothing matches. Filter
    /// values are checked by the caller before they get here.
    pub fn list(&self, filter: Option<ProductType>) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| filter.map_or(true, |t| p.product_type == t))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
