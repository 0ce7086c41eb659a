// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps written to `create_at` / `update_at`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
