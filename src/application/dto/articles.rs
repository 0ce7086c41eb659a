use crate::domain::article::{Article, ArticleContent, ArticleTitle, NewArticle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const TITLE_MIN_CHARS: usize = 10;
pub const TITLE_MAX_CHARS: usize = 160;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ArticleCreateRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub content: String,
}

impl ArticleCreateRequest {
    /// Field names in declaration order.
    pub const FIELDS: &'static [&'static str] = &["title", "content"];

    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn into_new_article(self, now: DateTime<Utc>) -> DomainResult<NewArticle> {
        Ok(NewArticle::new(
            ArticleTitle::new(self.title)?,
            ArticleContent::new(self.content)?,
            now,
        ))
    }
}

/// Full replacement of an article's editable fields. The id normally comes
/// from the request path and overrides anything sent in the body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ArticleUpdateRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_id"))]
    pub id: i64,
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub content: String,
}

impl ArticleUpdateRequest {
    /// Field names in declaration order.
    pub const FIELDS: &'static [&'static str] = &["id", "title", "content"];

    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            create_at: article.created_at,
            update_at: article.updated_at,
        }
    }
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn validate_title(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    let chars = value.chars().count();
    if chars < TITLE_MIN_CHARS {
        return Err(ValidationError::new("min"));
    }
    if chars > TITLE_MAX_CHARS {
        return Err(ValidationError::new("max"));
    }
    Ok(())
}

fn validate_id(value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
