use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends; the service and
/// handlers only ever see this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product from validated input
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Replace the mutable fields of an existing product, or None if absent
    async fn update(&self, id: Uuid, input: ProductInput) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether a record existed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;

    /// Set the stock quantity of a product, or None if absent
    async fn set_stock(&self, id: Uuid, quantity: i32) -> ProductResult<Option<Product>>;

    /// Zero the stock quantity of a product, or None if absent
    async fn clear_stock(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Snapshot of all products in ascending ID order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;
}

/// In-memory repository backed by a shared map.
///
/// Clones share the same collection. The BTreeMap keeps `list_all` in
/// ascending ID order; with v7 UUIDs that order follows creation time.
/// Each mutation holds the write lock for the whole read-modify-write,
/// so a reader never observes a partially applied update.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let product = Product::new(input);
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply_input(input);
        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let removed = products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(removed)
    }

    async fn set_stock(&self, id: Uuid, quantity: i32) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };
        product.set_stock(quantity);
        tracing::info!(product_id = %id, quantity, "Set product stock");
        Ok(Some(product.clone()))
    }

    async fn clear_stock(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };
        product.set_stock(0);
        tracing::info!(product_id = %id, "Cleared product stock");
        Ok(Some(product.clone()))
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }
}
