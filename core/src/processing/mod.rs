pub mod aggregate;
pub mod downsample;

pub use aggregate::{aggregate, aggregate_samples, slice_start, ANALYTICS_TARGET_POINTS};
pub use downsample::{block_average, downsample};
