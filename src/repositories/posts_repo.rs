use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::post::Post, Result};

use super::PostgresRepo;

/// The post store adapter. Handlers never talk to the database directly;
/// they go through this trait so tests can swap in an in-memory fake.
#[async_trait]
pub trait PostsRepository: Sync + Send {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>>;
    async fn create_post(&self, title: &str, author: &str, content: &str) -> Result<Post>;
    async fn update_post(
        &self,
        post_id: Uuid,
        title: &str,
        author: &str,
        content: &str,
    ) -> Result<()>;
    async fn delete_post(&self, post_id: Uuid) -> Result<()>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, author, content, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn create_post(&self, title: &str, author: &str, content: &str) -> Result<Post> {
        let id = Uuid::now_v7();

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, author, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, content, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(author)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        title: &str,
        author: &str,
        content: &str,
    ) -> Result<()> {
        // created_at is deliberately left out: it is set once at creation.
        // An unknown id updates zero rows, which the store treats as success.
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, author = $3, content = $4
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .bind(title)
        .bind(author)
        .bind(content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
