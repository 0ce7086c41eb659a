// src/application/services/mod.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::{
        ApplicationResult,
        commands::articles::{ArticleCommandService, DeleteArticleCommand},
        dto::{ArticleCreateRequest, ArticleResponse, ArticleUpdateRequest},
        ports::ClockPort,
        queries::articles::{ArticleQueryService, GetArticleByIdQuery},
    },
    domain::article::ArticleRepository,
};

/// The article operations the HTTP layer depends on.
#[async_trait]
pub trait ArticleUsecase: Send + Sync {
    async fn get_all(&self) -> ApplicationResult<Vec<ArticleResponse>>;

    /// `None` means no article exists under `id`; deciding what that means
    /// for the caller is left to the caller.
    async fn get_by_id(&self, id: i64) -> ApplicationResult<Option<ArticleResponse>>;

    async fn update(&self, request: ArticleUpdateRequest) -> ApplicationResult<ArticleResponse>;

    async fn store(&self, request: ArticleCreateRequest) -> ApplicationResult<ArticleResponse>;

    async fn delete(&self, id: i64) -> ApplicationResult<bool>;
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_repo: Arc<dyn ArticleRepository>, clock: Arc<ClockPort>) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        Self {
            article_commands,
            article_queries,
        }
    }
}

#[async_trait]
impl ArticleUsecase for ApplicationServices {
    async fn get_all(&self) -> ApplicationResult<Vec<ArticleResponse>> {
        self.article_queries.list_articles().await
    }

    async fn get_by_id(&self, id: i64) -> ApplicationResult<Option<ArticleResponse>> {
        self.article_queries
            .get_article_by_id(GetArticleByIdQuery { id })
            .await
    }

    async fn update(&self, request: ArticleUpdateRequest) -> ApplicationResult<ArticleResponse> {
        self.article_commands.update_article(request).await
    }

    async fn store(&self, request: ArticleCreateRequest) -> ApplicationResult<ArticleResponse> {
        self.article_commands.create_article(request).await
    }

    async fn delete(&self, id: i64) -> ApplicationResult<bool> {
        self.article_commands
            .delete_article(DeleteArticleCommand { id })
            .await
    }
}
