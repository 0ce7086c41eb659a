// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Always reports [`fixed_now`] plus a configurable offset.
#[derive(Clone, Default)]
pub struct FixedClock {
    pub offset_secs: i64,
}

impl FixedClock {
    pub fn later(offset_secs: i64) -> Self {
        Self { offset_secs }
    }
}

impl articles_core::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now() + chrono::Duration::seconds(self.offset_secs)
    }
}
