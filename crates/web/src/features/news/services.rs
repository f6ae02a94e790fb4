use sqlx::PgPool;
use storage::{
    dto::news::{CreateNewsRequest, UpdateNewsRequest},
    error::Result,
    models::NewsPost,
    repository::news::NewsRepository,
};
use uuid::Uuid;

pub async fn list_news(pool: &PgPool) -> Result<Vec<NewsPost>> {
    let repo = NewsRepository::new(pool);
    repo.list().await
}

pub async fn get_news_post(pool: &PgPool, id: Uuid) -> Result<NewsPost> {
    let repo = NewsRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_news_post(pool: &PgPool, request: &CreateNewsRequest) -> Result<NewsPost> {
    let repo = NewsRepository::new(pool);
    repo.create(request).await
}

pub async fn update_news_post(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateNewsRequest,
) -> Result<NewsPost> {
    let repo = NewsRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

pub async fn delete_news_post(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = NewsRepository::new(pool);
    repo.delete(id).await
}
