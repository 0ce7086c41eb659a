// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repo;
pub mod time;
pub mod usecase;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// 記事リポジトリ
pub use article_repo::{
    FAILING_REPO_MESSAGE, FailingArticleRepo, InMemoryArticleRepo, StaleArticleRepo,
    sample_article,
};

// ユースケース
pub use usecase::SilentDeleteFailure;
