use sqlx::PgPool;

use crate::products::{Product, UpdateProduct};

/// Repository for product rows.
///
/// Every read and write is filtered by `user_id`, so a caller can never see
/// or touch another user's products; an id owned by someone else behaves
/// exactly like a missing id.
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new ProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product owned by `user_id`
    pub async fn create(&self, user_id: i32, name: &str, price: f64) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, user_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    /// All products owned by `user_id`, oldest first
    pub async fn list_owned(&self, user_id: i32) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, user_id, created_at, updated_at
            FROM products
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// A single product, only if it exists and belongs to `user_id`
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, user_id, created_at, updated_at
            FROM products
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Apply a partial update to an owned product.
    ///
    /// Returns `None` when the product is absent or not owned. The row is
    /// locked between the scoped fetch and the write.
    pub async fn update_owned(
        &self,
        id: i32,
        user_id: i32,
        changes: UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, user_id, created_at, updated_at
            FROM products
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut product) = existing else {
            // Dropping tx rolls back
            return Ok(None);
        };
        product.apply(changes);

        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1, price = $2, updated_at = NOW()
            WHERE id = $3 AND user_id = $4
            RETURNING id, name, price, user_id, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete an owned product; returns false when nothing matched
    pub async fn delete_owned(&self, id: i32, user_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
