//! Unit-aware delay
//!
//! `wait(1.5, "s")` suspends the current task for 1500ms. Unknown unit tags
//! are treated as milliseconds. The returned future never fails and has no
//! cancellation hook of its own; wrap it in `tokio::time::timeout` or
//! `tokio::select!` if the caller needs one.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

/// Recognized time unit tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Millis,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Parse a unit tag, returning `None` for anything unrecognized
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "ms" => Some(TimeUnit::Millis),
            "s" => Some(TimeUnit::Seconds),
            "m" => Some(TimeUnit::Minutes),
            "h" => Some(TimeUnit::Hours),
            _ => None,
        }
    }

    /// Milliseconds in one unit
    pub fn millis(self) -> f64 {
        match self {
            TimeUnit::Millis => 1.0,
            TimeUnit::Seconds => 1_000.0,
            TimeUnit::Minutes => 60_000.0,
            TimeUnit::Hours => 3_600_000.0,
        }
    }
}

/// Never fails: unknown tags become [`TimeUnit::Millis`]
impl FromStr for TimeUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TimeUnit::parse(s).unwrap_or_default())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TimeUnit::Millis => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
        };
        f.write_str(tag)
    }
}

/// Convert `value` in `unit` to a duration.
///
/// Negative and NaN values clamp to zero; values too large for a
/// `Duration` saturate to `Duration::MAX`.
pub fn duration_for(value: f64, unit: TimeUnit) -> Duration {
    let ms = value * unit.millis();
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1_000.0).unwrap_or(Duration::MAX)
}

/// Suspend for `value` units, where `unit` is one of `ms`, `s`, `m`, `h`
pub async fn wait(value: f64, unit: &str) {
    let unit = TimeUnit::parse(unit).unwrap_or_default();
    wait_for(duration_for(value, unit)).await;
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Suspend for an already computed duration
pub async fn wait_for(duration: Duration) {
    debug!(duration_ms = whole_millis(duration), "waiting");
    tokio::time::sleep(duration).await;
}
