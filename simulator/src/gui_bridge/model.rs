use loadcore::telemetry::Metrics;
use loadcore::{Analytics, RangeSelector};
use serde::{Deserialize, Serialize};

pub const SERIES_LABEL: &str = "Average Load (W)";

/// Chart-ready payload handed to the renderer for one range selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsView {
    pub range: RangeSelector,
    pub total_energy_kwh: f64,
    pub peak_power_kw: f64,
    pub sample_count: usize,
    pub total_display: String,
    pub peak_display: String,
    pub points_display: String,
    pub series_label: String,
    pub labels: Vec<usize>,
    pub points: Vec<f64>,
}

impl AnalyticsView {
    pub fn from_analytics(analytics: &Analytics) -> Self {
        let summary = &analytics.summary;
        Self {
            range: analytics.selector,
            total_energy_kwh: summary.total_energy_kwh,
            peak_power_kw: summary.peak_power_kw,
            sample_count: summary.sample_count,
            total_display: group_thousands(summary.total_energy_kwh.round() as u64),
            peak_display: format!("{:.2}", summary.peak_power_kw),
            points_display: group_thousands(summary.sample_count as u64),
            series_label: SERIES_LABEL.to_string(),
            labels: (0..analytics.downsampled.len()).collect(),
            points: analytics.downsampled.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusModel {
    pub series_length: usize,
    pub series_start: Option<String>,
    pub metrics: Metrics,
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadcore::AggregateResult;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_051_200), "1,051,200");
    }

    #[test]
    fn view_formats_summary() {
        let analytics = Analytics {
            selector: RangeSelector::Year,
            summary: AggregateResult {
                total_energy_kwh: 4_567.5,
                peak_power_kw: 2.2597,
                sample_count: 525_600,
            },
            downsampled: vec![410.0, 980.5, 1200.0],
        };
        let view = AnalyticsView::from_analytics(&analytics);
        assert_eq!(view.total_display, "4,568");
        assert_eq!(view.peak_display, "2.26");
        assert_eq!(view.points_display, "525,600");
        assert_eq!(view.labels, vec![0, 1, 2]);
        assert_eq!(view.series_label, SERIES_LABEL);
    }

    #[test]
    fn empty_analytics_renders_zeroes() {
        let view = AnalyticsView::from_analytics(&Analytics::empty(RangeSelector::Month));
        assert_eq!(view.total_display, "0");
        assert_eq!(view.peak_display, "0.00");
        assert!(view.labels.is_empty());
    }
}
