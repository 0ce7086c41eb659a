use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleResponse, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// `None` when nothing is stored under the id. Id `0` never names a row,
    /// so it short-circuits without a query.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<ArticleResponse>> {
        let Ok(id) = ArticleId::new(query.id) else {
            return Ok(None);
        };

        let article = self.repo.find_by_id(id).await?;
        Ok(article.map(Into::into))
    }
}
