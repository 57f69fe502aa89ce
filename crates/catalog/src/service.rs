use catalog_store::{NewProduct, PgPool, Product, ProductRepository, StoreError};

use crate::error::{ProductError, Result};

/// CRUD over the product catalog. Every operation runs inside its own
/// transaction.
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        tracing::debug!("retrieving all products");

        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;
        let products = ProductRepository::list_all(&mut tx).await?;
        tx.commit().await.map_err(StoreError::from)?;

        Ok(products)
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        tracing::debug!(id, "retrieving product");

        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;
        let product = ProductRepository::find_by_id(&mut tx, id)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        tx.commit().await.map_err(StoreError::from)?;

        Ok(product)
    }

    pub async fn create(&self, fields: NewProduct) -> Result<Product> {
        tracing::debug!(name = %fields.name, "creating product");

        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;
        let product = ProductRepository::insert(&mut tx, &fields).await?;
        tx.commit().await.map_err(StoreError::from)?;

        Ok(product)
    }

    /// Overwrite name, description and price of an existing product. A
    /// concurrent delete makes this observe `NotFound`.
    pub async fn update(&self, id: i64, fields: NewProduct) -> Result<Product> {
        tracing::debug!(id, "updating product");

        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;
        let product = ProductRepository::update(&mut tx, id, &fields)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        tx.commit().await.map_err(StoreError::from)?;

        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!(id, "deleting product");

        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;
        let removed = ProductRepository::delete(&mut tx, id).await?;
        if !removed {
            return Err(ProductError::NotFound(id));
        }
        tx.commit().await.map_err(StoreError::from)?;

        Ok(())
    }
}
