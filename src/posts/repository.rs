use sqlx::PgPool;

use crate::posts::{Post, UpdatePost};

/// Repository for post rows, scoped by owner on every query
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new PostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a post owned by `user_id`
    pub async fn create(
        &self,
        user_id: i32,
        title: &str,
        description: &str,
    ) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, user_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    /// All posts owned by `user_id`, oldest first
    pub async fn list_owned(&self, user_id: i32) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM posts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// A single post, only if it exists and belongs to `user_id`
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM posts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Apply a partial update to an owned post; `None` if absent or not owned
    pub async fn update_owned(
        &self,
        id: i32,
        user_id: i32,
        changes: UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM posts
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut post) = existing else {
            return Ok(None);
        };
        post.apply(changes);

        let updated = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, description = $2, updated_at = NOW()
            WHERE id = $3 AND user_id = $4
            RETURNING id, title, description, user_id, created_at, updated_at
            "#,
        )
        .bind(&post.title)
        .bind(&post.description)
        .bind(id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete an owned post; returns false when nothing matched
    pub async fn delete_owned(&self, id: i32, user_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
