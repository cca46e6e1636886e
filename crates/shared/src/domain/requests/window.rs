use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Inclusive bounds of a transaction feed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

impl TimeWindow {
    pub const TRAILING_DAYS: i64 = 7;

    /// The seven days leading up to the current instant. Every call yields a fresh window.
    pub fn trailing_week() -> Self {
        Self::trailing_week_from(Utc::now())
    }

    pub fn trailing_week_from(now: DateTime<Utc>) -> Self {
        Self {
            min: now - Duration::days(Self::TRAILING_DAYS),
            max: now,
        }
    }

    pub fn between(min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        Self { min, max }
    }

    pub fn min_timestamp(&self) -> String {
        format_timestamp(&self.min)
    }

    pub fn max_timestamp(&self) -> String {
        format_timestamp(&self.max)
    }
}

// ISO-8601, UTC, second precision: 2026-01-31T23:59:59Z
fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
