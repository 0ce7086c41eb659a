// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleCreateRequest, ArticleResponse},
    error::ApplicationResult,
};

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        request: ArticleCreateRequest,
    ) -> ApplicationResult<ArticleResponse> {
        let new_article = request.into_new_article(self.clock.now())?;

        let id = self.repo.store(&new_article).await?;
        tracing::debug!(article_id = %id, "article created");

        Ok(new_article.with_id(id).into())
    }
}
