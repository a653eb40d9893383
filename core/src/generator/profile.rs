use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Inclusive hour-of-day range with the load multiplier applied inside it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HourWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub multiplier: f64,
}

impl HourWindow {
    pub const fn new(start_hour: u32, end_hour: u32, multiplier: f64) -> Self {
        Self {
            start_hour,
            end_hour,
            multiplier,
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }
}

/// Deterministic shaping of a synthetic household load.
///
/// A sample is `base * time * season + noise`, floored and rounded to whole
/// watts. Summer covers April to July and winter November to February
/// (zero-based months 3..=6 and 10, 11, 0, 1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoadProfile {
    pub base_watts: f64,
    pub floor_watts: f64,
    pub noise_span_watts: f64,
    pub summer_multiplier: f64,
    pub winter_multiplier: f64,
    pub morning_peak: HourWindow,
    pub evening_peak: HourWindow,
    pub night_low: HourWindow,
}

impl Default for LoadProfile {
    fn default() -> Self {
        Self {
            base_watts: 400.0,
            floor_watts: 50.0,
            noise_span_watts: 200.0,
            summer_multiplier: 1.8,
            winter_multiplier: 0.8,
            morning_peak: HourWindow::new(6, 9, 2.5),
            evening_peak: HourWindow::new(18, 22, 3.0),
            night_low: HourWindow::new(1, 5, 0.4),
        }
    }
}

impl LoadProfile {
    /// `month0` is the zero-based calendar month.
    pub fn seasonal_multiplier(&self, month0: u32) -> f64 {
        let is_summer = (3..=6).contains(&month0);
        let is_winter = month0 >= 10 || month0 <= 1;
        if is_summer {
            self.summer_multiplier
        } else if is_winter {
            self.winter_multiplier
        } else {
            1.0
        }
    }

    /// Peak windows are checked before the night low.
    pub fn time_multiplier(&self, hour: u32) -> f64 {
        if self.morning_peak.contains(hour) {
            self.morning_peak.multiplier
        } else if self.evening_peak.contains(hour) {
            self.evening_peak.multiplier
        } else if self.night_low.contains(hour) {
            self.night_low.multiplier
        } else {
            1.0
        }
    }

    /// Load in watts at `instant`, given a uniform draw `unit` in `[0, 1)`.
    pub fn sample<Tz: TimeZone>(&self, instant: &DateTime<Tz>, unit: f64) -> u32 {
        let time_mult = self.time_multiplier(instant.hour());
        let seasonal_mult = self.seasonal_multiplier(instant.month0());
        let noise = (unit - 0.5) * self.noise_span_watts;
        let raw = self.base_watts * time_mult * seasonal_mult + noise;
        raw.max(self.floor_watts).round() as u32
    }
}
