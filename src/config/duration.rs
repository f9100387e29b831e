//! Duration parsing utilities.

use anyhow::Context;
use std::time::Duration;

/// Parse a duration string like "1h", "30m", "300s", "300".
/// Supports:
/// - Plain numbers (interpreted as seconds): "300"
/// - Seconds suffix: "300s"
/// - Minutes suffix: "30m"
/// - Hours suffix: "1h"
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    let (num_str, unit_secs, unit) = if let Some(n) = s.strip_suffix('h') {
        (n, 3600, "hours")
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60, "minutes")
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1, "seconds")
    } else {
        (s, 1, "duration")
    };

    let value: u64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid {unit} value: {num_str}"))?;
    if value == 0 {
        anyhow::bail!("Duration must be positive: {s}");
    }

    Ok(Duration::from_secs(value * unit_secs))
}
