use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage adapter for the `articles` table. Each method is a single round
/// trip; none of them run inside a transaction.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Every stored article, in whatever order the store yields them.
    async fn get_all(&self) -> DomainResult<Vec<Article>>;

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Writes title, content and `updated_at` for `article.id` and hands the
    /// input back. The affected-row count does not influence the result, so an
    /// unknown id is reported as success.
    async fn update(&self, article: Article) -> DomainResult<Article>;

    /// Inserts the article and returns the generated primary key.
    async fn store(&self, article: &NewArticle) -> DomainResult<ArticleId>;

    /// `true` once the statement has executed, whether or not a row matched.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}
