// tests/support/mocks/article_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use articles_core::domain::article::{
    Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle, NewArticle,
};
use articles_core::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

use super::time::fixed_now;

pub fn sample_article(id: i64, title: &str, content: &str) -> Article {
    NewArticle::new(
        ArticleTitle::new(title).unwrap(),
        ArticleContent::new(content).unwrap(),
        fixed_now(),
    )
    .with_id(ArticleId::new(id).unwrap())
}

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// Map-backed repository with the same contract as the SQL adapter: update and
/// delete report success for unknown ids.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<BTreeMap<i64, Article>>,
    next_id: Mutex<i64>,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let repo = Self::new();
        {
            let mut rows = repo.rows.lock().unwrap();
            let mut next_id = repo.next_id.lock().unwrap();
            for article in articles {
                let id = i64::from(article.id);
                *next_id = (*next_id).max(id);
                rows.insert(id, article);
            }
        }
        repo
    }

    pub fn snapshot(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.get_mut(&i64::from(article.id)) {
            row.title = article.title.clone();
            row.content = article.content.clone();
            row.updated_at = article.updated_at;
        }
        Ok(article)
    }

    async fn store(&self, article: &NewArticle) -> DomainResult<ArticleId> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = ArticleId::new(*next_id)?;
        self.rows
            .lock()
            .unwrap()
            .insert(*next_id, article.clone().with_id(id));
        Ok(id)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().remove(&i64::from(id));
        Ok(true)
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// Every call fails as if the database were unreachable.
pub struct FailingArticleRepo;

pub const FAILING_REPO_MESSAGE: &str = "error communicating with database: connection refused";

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Query(FAILING_REPO_MESSAGE.into()))
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Query(FAILING_REPO_MESSAGE.into()))
    }

    async fn update(&self, _article: Article) -> DomainResult<Article> {
        Err(DomainError::Query(FAILING_REPO_MESSAGE.into()))
    }

    async fn store(&self, _article: &NewArticle) -> DomainResult<ArticleId> {
        Err(DomainError::Query(FAILING_REPO_MESSAGE.into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        Err(DomainError::Query(FAILING_REPO_MESSAGE.into()))
    }
}

/* -------------------------------- StaleArticleRepo -------------------------------- */

/// Lookups answer with a cached record for any id while writes touch nothing,
/// the way a lagging read replica would.
pub struct StaleArticleRepo {
    pub stale: Article,
    pub update_calls: AtomicUsize,
}

impl StaleArticleRepo {
    pub fn new(stale: Article) -> Self {
        Self {
            stale,
            update_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ArticleRepository for StaleArticleRepo {
    async fn get_all(&self) -> DomainResult<Vec<Article>> {
        Ok(vec![self.stale.clone()])
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut article = self.stale.clone();
        article.id = id;
        Ok(Some(article))
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Ok(article)
    }

    async fn store(&self, _article: &NewArticle) -> DomainResult<ArticleId> {
        ArticleId::new(self.stale.id.get())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        Ok(true)
    }
}
