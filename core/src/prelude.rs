use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: usize = 24 * 60;

/// Minute-resolution load samples in watts, anchored at `start`.
///
/// Sample `i` corresponds to `start + i` minutes. The series is never
/// mutated after construction; regeneration builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    start: DateTime<FixedOffset>,
    samples: Vec<u32>,
}

impl Series {
    pub fn new(start: DateTime<FixedOffset>, samples: Vec<u32>) -> Self {
        Self { start, samples }
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Wall-clock instant of the sample at `index`.
    pub fn timestamp_at(&self, index: usize) -> DateTime<FixedOffset> {
        self.start + Duration::minutes(index as i64)
    }
}

/// Trailing window of the series considered by the analytics view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RangeSelector {
    Month,
    Year,
    All,
}

impl RangeSelector {
    pub const ALL: [RangeSelector; 3] = [RangeSelector::Month, RangeSelector::Year, RangeSelector::All];

    /// Number of trailing minutes covered, or `None` for the whole series.
    pub fn window_minutes(self) -> Option<usize> {
        match self {
            RangeSelector::Month => Some(30 * MINUTES_PER_DAY),
            RangeSelector::Year => Some(365 * MINUTES_PER_DAY),
            RangeSelector::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RangeSelector::Month => "month",
            RangeSelector::Year => "year",
            RangeSelector::All => "all",
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelector {
    type Err = LoadError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(RangeSelector::Month),
            "year" => Ok(RangeSelector::Year),
            "all" => Ok(RangeSelector::All),
            other => Err(LoadError::UnknownRange(other.to_string())),
        }
    }
}

/// Energy statistics over a series slice.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregateResult {
    pub total_energy_kwh: f64,
    pub peak_power_kw: f64,
    pub sample_count: usize,
}

/// Output of a range aggregation: statistics plus the chart-ready reduction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    pub selector: RangeSelector,
    pub summary: AggregateResult,
    pub downsampled: Vec<f64>,
}

impl Analytics {
    pub fn empty(selector: RangeSelector) -> Self {
        Self {
            selector,
            summary: AggregateResult::default(),
            downsampled: Vec::new(),
        }
    }
}

/// Common error type for the load analytics core.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("invalid horizon: {0} minutes (must be positive)")]
    InvalidHorizon(usize),
    #[error("degenerate downsample target: {0} (must be positive)")]
    DegenerateTarget(usize),
    #[error("unknown range selector: {0}")]
    UnknownRange(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn series_timestamps_advance_by_minute() {
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        let series = Series::new(start, vec![100, 200, 300]);
        assert_eq!(series.timestamp_at(0), start);
        assert_eq!(series.timestamp_at(2), start + Duration::minutes(2));
    }

    #[test]
    fn range_selector_parses_names() {
        assert_eq!("month".parse::<RangeSelector>().unwrap(), RangeSelector::Month);
        assert_eq!(" Year ".parse::<RangeSelector>().unwrap(), RangeSelector::Year);
        assert_eq!("all".parse::<RangeSelector>().unwrap(), RangeSelector::All);
        assert_eq!(
            "week".parse::<RangeSelector>(),
            Err(LoadError::UnknownRange("week".into()))
        );
    }

    #[test]
    fn range_selector_serializes_lowercase() {
        let json = serde_json::to_string(&RangeSelector::Month).unwrap();
        assert_eq!(json, "\"month\"");
    }

    #[test]
    fn window_uses_fixed_day_counts() {
        assert_eq!(RangeSelector::Month.window_minutes(), Some(43_200));
        assert_eq!(RangeSelector::Year.window_minutes(), Some(525_600));
        assert_eq!(RangeSelector::All.window_minutes(), None);
    }
}
