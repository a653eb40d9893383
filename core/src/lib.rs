//! Core of the load analytics platform.
//!
//! Synthesizes a minute-resolution power-load series, reduces it by block
//! averaging for charting, and computes range-filtered energy statistics.
//! Rendering lives outside this crate; everything here returns plain data.

pub mod generator;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod source;
pub mod store;
pub mod telemetry;

pub use generator::{generate_series, LoadProfile, SeriesGenerator, DEFAULT_HORIZON_MINUTES};
pub use prelude::{AggregateResult, Analytics, LoadError, LoadResult, RangeSelector, Series};
pub use processing::{aggregate, aggregate_samples, downsample, ANALYTICS_TARGET_POINTS};
pub use source::{Clock, ConstantRandom, FixedClock, RandomSource, SeededRandom, SystemClock};
pub use store::SeriesStore;
