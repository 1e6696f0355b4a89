use chrono::{DateTime, SecondsFormat, Utc};

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    /// ISO-8601 with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
    fn now_iso(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.now_ms())
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
