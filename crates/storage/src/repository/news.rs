use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::news::{CreateNewsRequest, UpdateNewsRequest};
use crate::error::{Result, StorageError};
use crate::models::NewsPost;

const COLUMNS: &str = "post_id, title, body, author, pinned, created_at, updated_at";

pub struct NewsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NewsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Pinned posts first, then newest first.
    pub async fn list(&self) -> Result<Vec<NewsPost>> {
        let posts = sqlx::query_as::<_, NewsPost>(&format!(
            "SELECT {COLUMNS} FROM news_posts ORDER BY pinned DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<NewsPost> {
        sqlx::query_as::<_, NewsPost>(&format!(
            "SELECT {COLUMNS} FROM news_posts WHERE post_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateNewsRequest) -> Result<NewsPost> {
        let post = sqlx::query_as::<_, NewsPost>(&format!(
            "INSERT INTO news_posts (title, body, author, pinned) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&req.title)
        .bind(&req.body)
        .bind(req.author.as_deref())
        .bind(req.pinned)
        .fetch_one(self.pool)
        .await?;

        Ok(post)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &NewsPost,
        req: &UpdateNewsRequest,
    ) -> Result<NewsPost> {
        let title = req.title.as_ref().unwrap_or(&existing.title);
        let body = req.body.as_ref().unwrap_or(&existing.body);
        let author = req.author.as_ref().or(existing.author.as_ref());
        let pinned = req.pinned.unwrap_or(existing.pinned);

        sqlx::query_as::<_, NewsPost>(&format!(
            "UPDATE news_posts SET title = $2, body = $3, author = $4, pinned = $5, \
             updated_at = now() WHERE post_id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(title)
        .bind(body)
        .bind(author)
        .bind(pinned)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM news_posts WHERE post_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
