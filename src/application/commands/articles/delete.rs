// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<bool> {
        let id = ArticleId::new(command.id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("data not found"))?;

        let deleted = self.repo.delete(id).await?;
        Ok(deleted)
    }
}
