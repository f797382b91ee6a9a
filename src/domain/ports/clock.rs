use chrono::{DateTime, Utc};

/// Source of "now" for time-windowed logic
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
