pub mod articles;

pub use articles::{ArticleCreateRequest, ArticleResponse, ArticleUpdateRequest};
