// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Replaces title and content. `created_at` is left alone and `updated_at`
    /// never moves before it, even if the clock reports an earlier instant.
    pub fn revise(&mut self, title: ArticleTitle, content: ArticleContent, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.updated_at = now.max(self.created_at);
    }
}

/// An article that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(title: ArticleTitle, content: ArticleContent, now: DateTime<Utc>) -> Self {
        Self {
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
