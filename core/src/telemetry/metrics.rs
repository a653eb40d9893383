use serde::Serialize;
use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub generations: usize,
    pub samples_generated: usize,
    pub aggregations: usize,
    pub errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_generation(&self, samples: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.generations += 1;
            metrics.samples_generated += samples;
        }
    }

    pub fn record_aggregation(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.aggregations += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    pub fn snapshot(&self) -> Metrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            Metrics::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_accumulates_counts() {
        let recorder = MetricsRecorder::new();
        recorder.record_generation(1_440);
        recorder.record_generation(60);
        recorder.record_aggregation();
        recorder.record_error();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.generations, 2);
        assert_eq!(snapshot.samples_generated, 1_500);
        assert_eq!(snapshot.aggregations, 1);
        assert_eq!(snapshot.errors, 1);
    }
}
