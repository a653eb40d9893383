use crate::generator::profile::LoadProfile;
use crate::prelude::{LoadError, LoadResult, Series, MINUTES_PER_DAY};
use crate::source::{Clock, RandomSource};
use crate::telemetry::log::LogManager;
use chrono::{Duration, Utc};

/// Two 365-day years of minutes. Leap days are not counted.
pub const DEFAULT_HORIZON_MINUTES: usize = MINUTES_PER_DAY * 365 * 2;

/// Builds minute-resolution load series from injected time and noise sources.
pub struct SeriesGenerator<C, R> {
    clock: C,
    random: R,
    profile: LoadProfile,
    logger: LogManager,
}

impl<C: Clock, R: RandomSource> SeriesGenerator<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        Self {
            clock,
            random,
            profile: LoadProfile::default(),
            logger: LogManager::new("generator"),
        }
    }

    pub fn with_profile(mut self, profile: LoadProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> &LoadProfile {
        &self.profile
    }

    pub fn generate(&mut self, horizon_minutes: usize) -> LoadResult<Series> {
        self.logger
            .record(&format!("Starting generation of {} minutes", horizon_minutes));
        let series = build_series(
            horizon_minutes,
            &self.clock,
            &mut self.random,
            &self.profile,
        )?;
        self.logger
            .record(&format!("Generated {} data points.", series.len()));
        Ok(series)
    }
}

/// Generates a series with the default load profile.
pub fn generate_series(
    horizon_minutes: usize,
    clock: &impl Clock,
    random: &mut impl RandomSource,
) -> LoadResult<Series> {
    build_series(horizon_minutes, clock, random, &LoadProfile::default())
}

fn build_series(
    horizon_minutes: usize,
    clock: &impl Clock,
    random: &mut impl RandomSource,
    profile: &LoadProfile,
) -> LoadResult<Series> {
    if horizon_minutes == 0 {
        return Err(LoadError::InvalidHorizon(horizon_minutes));
    }
    let span = i64::try_from(horizon_minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .ok_or(LoadError::InvalidHorizon(horizon_minutes))?;

    // The clock is read once; the start label and every sample step derive from it.
    let now = clock.now();
    let zone = now.timezone();
    let start = now - span;
    let step = Duration::minutes(1);

    // Step in UTC and read calendar fields in the clock's zone, so the hour
    // of day follows daylight saving changes inside the horizon.
    let mut samples = Vec::with_capacity(horizon_minutes);
    let mut instant = start.with_timezone(&Utc);
    for _ in 0..horizon_minutes {
        let local = instant.with_timezone(&zone);
        samples.push(profile.sample(&local, random.next_unit()));
        instant += step;
    }

    Ok(Series::new(start.fixed_offset(), samples))
}
