use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, TimeDelta, Utc};

use crate::error::{PipelineError, Result};

// Lookback window handling lives here to keep the pipeline focused.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
  pub reference: DateTime<Utc>,
  pub lookback_hours: i64,
  pub cutoff: DateTime<Utc>,
}

impl TimeWindow {
  /// Build a window ending at `reference`, truncated to millisecond precision.
  pub fn new(lookback_hours: i64, reference: DateTime<Utc>) -> Result<Self> {
    let reference = reference.trunc_subsecs(3);
    let cutoff = compute_since(lookback_hours, reference)?;

    Ok(Self {
      reference,
      lookback_hours,
      cutoff,
    })
  }

  /// Cutoff rendered the way the GitHub `since` query expects it.
  pub fn since_param(&self) -> String {
    iso_millis(self.cutoff)
  }
}

/// Compute the instant `lookback_hours` before `reference`.
pub fn compute_since(lookback_hours: i64, reference: DateTime<Utc>) -> Result<DateTime<Utc>> {
  if lookback_hours <= 0 {
    return Err(PipelineError::InvalidArgument(format!(
      "lookback hours must be positive, got {lookback_hours}"
    )));
  }

  TimeDelta::try_hours(lookback_hours)
    .and_then(|delta| reference.checked_sub_signed(delta))
    .ok_or_else(|| PipelineError::InvalidArgument(format!("lookback of {lookback_hours}h is out of range")))
}

pub fn iso_millis(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a `--now-override` string into a UTC instant.
/// Accepts RFC3339 (e.g. 2026-01-08T18:00:00Z) or a naive timestamp
/// formatted as `%Y-%m-%dT%H:%M:%S`, which is taken as UTC.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(|raw| {
    DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Utc))
      .or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .map(|ndt| ndt.and_utc())
      })
  })
}
