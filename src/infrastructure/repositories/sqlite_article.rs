use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const SELECT_ALL: &str = "SELECT id, title, content, create_at, update_at FROM articles";
const SELECT_BY_ID: &str =
    "SELECT id, title, content, create_at, update_at FROM articles WHERE id = ?";
const UPDATE: &str = "UPDATE articles SET title = ?, content = ?, update_at = ? WHERE id = ?";
const INSERT: &str =
    "INSERT INTO articles (title, content, create_at, update_at) VALUES (?, ?, ?, ?)";
const DELETE: &str = "DELETE FROM articles WHERE id = ?";

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    create_at: DateTime<Utc>,
    update_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let row_id = row.id;
        let scan = move |err: DomainError| DomainError::Scan(format!("article {row_id}: {err}"));

        Ok(Article {
            id: ArticleId::new(row.id).map_err(scan)?,
            title: ArticleTitle::new(row.title).map_err(scan)?,
            content: ArticleContent::new(row.content).map_err(scan)?,
            created_at: row.create_at,
            updated_at: row.update_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(SELECT_ALL)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        // One undecodable row must not hide the rest of the table.
        Ok(rows
            .into_iter()
            .filter_map(|row| match Article::try_from(row) {
                Ok(article) => Some(article),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping undecodable article row");
                    None
                }
            })
            .collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(SELECT_BY_ID)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let result = sqlx::query(UPDATE)
            .bind(article.title.as_str())
            .bind(article.content.as_str())
            .bind(article.updated_at)
            .bind(i64::from(article.id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::info!(
            article_id = %article.id,
            rows_affected = result.rows_affected(),
            "article update executed"
        );
        Ok(article)
    }

    async fn store(&self, article: &NewArticle) -> DomainResult<ArticleId> {
        let result = sqlx::query(INSERT)
            .bind(article.title.as_str())
            .bind(article.content.as_str())
            .bind(article.created_at)
            .bind(article.updated_at)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let id = ArticleId::new(result.last_insert_rowid())
            .map_err(|_| DomainError::Query("insert did not yield a row id".into()))?;
        tracing::info!(article_id = %id, "article inserted");
        Ok(id)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query(DELETE)
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::info!(
            article_id = %id,
            rows_affected = result.rows_affected(),
            "article delete executed"
        );
        Ok(true)
    }
}
