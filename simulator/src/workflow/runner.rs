use crate::gui_bridge::model::{AnalyticsView, StatusModel};
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use loadcore::telemetry::{LogManager, MetricsRecorder};
use loadcore::{Clock, RangeSelector, SeededRandom, SeriesGenerator, SeriesStore, SystemClock};
use std::sync::Arc;

/// Owns the active series and serves analytics over it.
pub struct Runner {
    config: WorkflowConfig,
    store: Arc<SeriesStore>,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            store: Arc::new(SeriesStore::new()),
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new("runner"),
        }
    }

    pub fn regenerate(&self) -> anyhow::Result<usize> {
        self.regenerate_with(&SystemClock)
    }

    /// Builds a fresh series against `clock` and swaps it in as the active one.
    pub fn regenerate_with(&self, clock: &impl Clock) -> anyhow::Result<usize> {
        let random = match self.config.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        let mut generator =
            SeriesGenerator::new(clock, random).with_profile(self.config.profile.clone());

        let series = match generator.generate(self.config.horizon_minutes) {
            Ok(series) => series,
            Err(err) => {
                self.metrics.record_error();
                return Err(err).context("generating load series");
            }
        };

        let samples = series.len();
        self.metrics.record_generation(samples);
        if self.store.replace(series).is_some() {
            self.logger.detail("previous series superseded");
        }
        Ok(samples)
    }

    pub fn analytics(&self, selector: RangeSelector) -> AnalyticsView {
        let analytics = self.store.aggregate(selector);
        self.metrics.record_aggregation();
        if analytics.summary.sample_count == 0 {
            self.logger
                .caution(&format!("no samples available for range {}", selector));
        }
        AnalyticsView::from_analytics(&analytics)
    }

    pub fn status(&self) -> StatusModel {
        let series = self.store.snapshot();
        StatusModel {
            series_length: series.as_ref().map_or(0, |s| s.len()),
            series_start: series.map(|s| s.start().to_rfc3339()),
            metrics: self.metrics.snapshot(),
        }
    }
}
