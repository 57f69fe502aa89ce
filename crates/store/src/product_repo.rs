use sqlx::PgConnection;

use crate::error::Result;
use crate::model::{NewProduct, Product};

/// Narrow repository over the `products` table.
pub struct ProductRepository;

impl ProductRepository {
    /// List every product, ordered by id so a single response is stable.
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products ORDER BY id",
        )
        .fetch_all(conn)
        .await?;

        Ok(products)
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(product)
    }

    pub async fn insert(conn: &mut PgConnection, fields: &NewProduct) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) \
             RETURNING id, name, description, price",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .fetch_one(conn)
        .await?;

        Ok(product)
    }

    /// Overwrite the mutable fields of an existing row. Returns `None` when
    /// the row is gone (e.g. a concurrent delete).
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        fields: &NewProduct,
    ) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, description = $3, price = $4 WHERE id = $1 \
             RETURNING id, name, description, price",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .fetch_optional(conn)
        .await?;

        Ok(product)
    }

    /// Delete a row; returns whether anything was removed.
    pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
