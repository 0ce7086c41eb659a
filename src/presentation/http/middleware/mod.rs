pub mod api_key;
pub mod chain;

pub use api_key::{API_KEY_HEADER, api_key_auth};
pub use chain::{Chain, Constructor, Handle};
