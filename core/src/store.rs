use crate::prelude::{Analytics, RangeSelector, Series};
use crate::processing::aggregate::aggregate;
use std::sync::{Arc, RwLock};

/// Holds the active series behind a swappable handle.
///
/// `replace` installs a complete new series in one step, so readers see
/// either the previous series or the new one, never a partial write.
#[derive(Default)]
pub struct SeriesStore {
    active: RwLock<Option<Arc<Series>>>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(series: Series) -> Self {
        Self {
            active: RwLock::new(Some(Arc::new(series))),
        }
    }

    /// Installs `series` and returns the one it superseded.
    pub fn replace(&self, series: Series) -> Option<Arc<Series>> {
        let next = Arc::new(series);
        match self.active.write() {
            Ok(mut guard) => guard.replace(next),
            Err(poisoned) => poisoned.into_inner().replace(next),
        }
    }

    pub fn snapshot(&self) -> Option<Arc<Series>> {
        match self.active.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Aggregates the active series; zeroed analytics when nothing is loaded.
    pub fn aggregate(&self, selector: RangeSelector) -> Analytics {
        match self.snapshot() {
            Some(series) => aggregate(&series, selector),
            None => Analytics::empty(selector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::AggregateResult;
    use chrono::{FixedOffset, TimeZone};
    use std::thread;

    fn series_of(value: u32, len: usize) -> Series {
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        Series::new(start, vec![value; len])
    }

    #[test]
    fn missing_series_aggregates_to_zero() {
        let store = SeriesStore::new();
        let analytics = store.aggregate(RangeSelector::Year);
        assert_eq!(analytics.summary, AggregateResult::default());
        assert!(analytics.downsampled.is_empty());
    }

    #[test]
    fn replace_swaps_without_touching_snapshots() {
        let store = SeriesStore::with_series(series_of(100, 10));
        let before = store.snapshot().unwrap();
        let previous = store.replace(series_of(200, 20)).unwrap();

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.len(), 10);
        assert_eq!(store.snapshot().unwrap().len(), 20);
    }

    #[test]
    fn readers_observe_complete_series() {
        let store = Arc::new(SeriesStore::with_series(series_of(100, 1_000)));
        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for round in 0..50u32 {
                    store.replace(series_of(100 + round, 1_000));
                }
            })
        };

        for _ in 0..200 {
            let series = store.snapshot().unwrap();
            let first = series.samples()[0];
            assert!(series.samples().iter().all(|&v| v == first));
            assert_eq!(series.len(), 1_000);
        }
        writer.join().unwrap();
    }
}
