use crate::math::stats::StatsHelper;
use crate::prelude::{AggregateResult, Analytics, RangeSelector, Series};
use crate::processing::downsample::block_average;

/// Chart resolution requested from the downsampler for every range.
pub const ANALYTICS_TARGET_POINTS: usize = 200;

/// Index of the first sample inside `selector`'s trailing window.
/// Series shorter than the window start at zero.
pub fn slice_start(len: usize, selector: RangeSelector) -> usize {
    selector
        .window_minutes()
        .map_or(0, |window| len.saturating_sub(window))
}

pub fn aggregate(series: &Series, selector: RangeSelector) -> Analytics {
    aggregate_samples(series.samples(), selector)
}

/// Energy statistics and a chart-ready reduction of the selected tail.
///
/// Each sample is taken as one minute of constant power, so the watt-minute
/// sum divided by 60 000 gives kWh. An empty input yields zeroed statistics
/// and no points.
pub fn aggregate_samples(samples: &[u32], selector: RangeSelector) -> Analytics {
    let relevant = &samples[slice_start(samples.len(), selector)..];
    if relevant.is_empty() {
        return Analytics::empty(selector);
    }

    let stats = StatsHelper::sum_and_peak(relevant);
    let summary = AggregateResult {
        total_energy_kwh: stats.sum as f64 / 1000.0 / 60.0,
        peak_power_kw: f64::from(stats.peak) / 1000.0,
        sample_count: stats.count,
    };

    let block_size = relevant.len() / ANALYTICS_TARGET_POINTS;
    Analytics {
        selector,
        summary,
        downsampled: block_average(relevant, block_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::MINUTES_PER_DAY;
    use chrono::{FixedOffset, TimeZone};

    fn series_of(samples: Vec<u32>) -> Series {
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        Series::new(start, samples)
    }

    #[test]
    fn one_hour_at_one_kilowatt_is_one_kwh() {
        let analytics = aggregate_samples(&[1000; 60], RangeSelector::All);
        assert!((analytics.summary.total_energy_kwh - 1.0).abs() < 1e-12);
        assert_eq!(analytics.summary.peak_power_kw, 1.0);
        assert_eq!(analytics.summary.sample_count, 60);
        assert_eq!(analytics.downsampled, vec![1000.0; 60]);
    }

    #[test]
    fn empty_series_yields_zero_result() {
        for selector in RangeSelector::ALL {
            let analytics = aggregate(&series_of(Vec::new()), selector);
            assert_eq!(analytics.summary, AggregateResult::default());
            assert!(analytics.downsampled.is_empty());
            assert_eq!(analytics.selector, selector);
        }
    }

    #[test]
    fn short_series_month_returns_everything() {
        let samples = vec![500u32; 10 * MINUTES_PER_DAY];
        let analytics = aggregate_samples(&samples, RangeSelector::Month);
        assert_eq!(analytics.summary.sample_count, samples.len());
    }

    #[test]
    fn month_and_year_take_the_tail() {
        let mut samples = vec![100u32; 400 * MINUTES_PER_DAY];
        let last = samples.len() - 1;
        samples[last] = 9000;
        samples[0] = 12_000;

        let month = aggregate_samples(&samples, RangeSelector::Month);
        assert_eq!(month.summary.sample_count, 30 * MINUTES_PER_DAY);
        assert_eq!(month.summary.peak_power_kw, 9.0);

        let year = aggregate_samples(&samples, RangeSelector::Year);
        assert_eq!(year.summary.sample_count, 365 * MINUTES_PER_DAY);
        assert_eq!(year.summary.peak_power_kw, 9.0);

        let all = aggregate_samples(&samples, RangeSelector::All);
        assert_eq!(all.summary.sample_count, samples.len());
        assert_eq!(all.summary.peak_power_kw, 12.0);
    }

    #[test]
    fn downsampled_month_has_two_hundred_points() {
        let samples = vec![750u32; 60 * MINUTES_PER_DAY];
        let analytics = aggregate_samples(&samples, RangeSelector::Month);
        // 43 200 / 200 = 216 per block, no remainder
        assert_eq!(analytics.downsampled.len(), 200);
        assert!(analytics.downsampled.iter().all(|&v| v == 750.0));
    }

    #[test]
    fn aggregate_is_repeatable() {
        let samples: Vec<u32> = (0..5_000).map(|i| 50 + (i * 37 % 2000)).collect();
        let series = series_of(samples);
        assert_eq!(
            aggregate(&series, RangeSelector::All),
            aggregate(&series, RangeSelector::All)
        );
    }

    #[test]
    fn slice_start_clamps_at_zero() {
        assert_eq!(slice_start(100, RangeSelector::Month), 0);
        assert_eq!(slice_start(50_000, RangeSelector::Month), 50_000 - 43_200);
        assert_eq!(slice_start(50_000, RangeSelector::All), 0);
    }
}
