/// Running totals gathered in a single pass over load samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumPeak {
    pub sum: u64,
    pub peak: u32,
    pub count: usize,
}

pub struct StatsHelper;

impl StatsHelper {
    /// Sum, maximum and length of `samples`; all zero when empty.
    pub fn sum_and_peak(samples: &[u32]) -> SumPeak {
        samples.iter().fold(SumPeak::default(), |acc, &value| SumPeak {
            sum: acc.sum + u64::from(value),
            peak: acc.peak.max(value),
            count: acc.count + 1,
        })
    }

    pub fn mean<T: Copy + Into<f64>>(values: &[T]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let sum: f64 = values.iter().map(|&v| v.into()).sum();
        sum / values.len() as f64
    }
}
