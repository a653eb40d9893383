pub mod profile;
pub mod series;

pub use profile::{HourWindow, LoadProfile};
pub use series::{generate_series, SeriesGenerator, DEFAULT_HORIZON_MINUTES};
