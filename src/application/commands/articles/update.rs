use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleResponse, ArticleUpdateRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle},
};

impl ArticleCommandService {
    /// Loads the stored article, replaces its title and content and writes it
    /// back. The load and the write are separate round trips, so two
    /// concurrent updates of the same id resolve as last-write-wins.
    pub async fn update_article(
        &self,
        request: ArticleUpdateRequest,
    ) -> ApplicationResult<ArticleResponse> {
        if request.id == 0 {
            return Err(ApplicationError::validation(
                "request article_id do not zero or empty",
            ));
        }
        let id = ArticleId::new(request.id)?;

        let mut article = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("data not found"))?;

        let ArticleUpdateRequest {
            id: _,
            title,
            content,
        } = request;
        article.revise(
            ArticleTitle::new(title)?,
            ArticleContent::new(content)?,
            self.clock.now(),
        );

        let updated = self.repo.update(article).await?;
        Ok(updated.into())
    }
}
