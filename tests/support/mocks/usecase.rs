// tests/support/mocks/usecase.rs
use articles_core::application::{
    ApplicationResult, ArticleUsecase,
    dto::{ArticleCreateRequest, ArticleResponse, ArticleUpdateRequest},
    error::ApplicationError,
};
use async_trait::async_trait;

/// Use case whose delete reports `false` without an error; everything else is
/// unreachable in the tests that use it.
pub struct SilentDeleteFailure;

#[async_trait]
impl ArticleUsecase for SilentDeleteFailure {
    async fn get_all(&self) -> ApplicationResult<Vec<ArticleResponse>> {
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: i64) -> ApplicationResult<Option<ArticleResponse>> {
        Ok(None)
    }

    async fn update(&self, _request: ArticleUpdateRequest) -> ApplicationResult<ArticleResponse> {
        Err(ApplicationError::Unknown)
    }

    async fn store(&self, _request: ArticleCreateRequest) -> ApplicationResult<ArticleResponse> {
        Err(ApplicationError::Unknown)
    }

    async fn delete(&self, _id: i64) -> ApplicationResult<bool> {
        Ok(false)
    }
}
