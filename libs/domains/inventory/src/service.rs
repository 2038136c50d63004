use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::metrics::{self, InventoryReport};
use crate::models::{Product, ProductInput};
use crate::query::{self, ProductQuery};
use crate::repository::ProductRepository;

/// Business logic for the product inventory.
///
/// Validates input before it reaches the repository and maps missing
/// records to [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: Uuid, quantity: i32) -> ProductResult<Product> {
        self.repository
            .set_stock(id, quantity)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn clear_stock(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .clear_stock(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, query))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.repository.list_all().await?;
        Ok(query::apply(products, &query))
    }

    #[instrument(skip(self))]
    pub async fn inventory_report(&self) -> ProductResult<InventoryReport> {
        let products = self.repository.list_all().await?;
        Ok(metrics::report(&products))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn named_input(name: &str) -> ProductInput {
        ProductInput {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn get_product_maps_a_missing_record_to_not_found() {
        let id = Uuid::now_v7();
        let mut repository = MockProductRepository::new();
        repository
            .expect_get_by_id()
            .withf(move |requested| *requested == id)
            .returning(|_| Ok(None));

        let service = ProductService::new(repository);
        let error = service.get_product(id).await.unwrap_err();
        assert!(matches!(error, ProductError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn delete_missing_product_is_not_found() {
        let mut repository = MockProductRepository::new();
        repository.expect_delete().returning(|_| Ok(false));

        let service = ProductService::new(repository);
        let error = service.delete_product(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(error, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_touching_the_store() {
        let mut repository = MockProductRepository::new();
        repository.expect_create().times(0);

        let service = ProductService::new(repository);
        let error = service
            .create_product(ProductInput::default())
            .await
            .unwrap_err();
        assert!(matches!(error, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn create_persists_valid_input() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_create()
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(repository);
        let product = service.create_product(named_input("Water")).await.unwrap();
        assert_eq!(product.name, "Water");
    }

    #[tokio::test]
    async fn update_validates_before_hitting_the_store() {
        let mut repository = MockProductRepository::new();
        repository.expect_update().times(0);

        let service = ProductService::new(repository);
        let error = service
            .update_product(Uuid::now_v7(), ProductInput::default())
            .await
            .unwrap_err();
        assert!(matches!(error, ProductError::Validation(_)));
    }
}
