pub mod stats;

pub use stats::{SumPeak, StatsHelper};
