use super::ArticleQueryService;
use crate::application::{dto::ArticleResponse, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleResponse>> {
        let records = self.repo.get_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
