//! Step-function statistics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`StepSeries`] or averaging over it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("series contains no samples")]
    EmptySeries,
    #[error("invalid window [{lower}, {upper}]: bounds must be finite with lower < upper")]
    InvalidWindow { lower: f64, upper: f64 },
    #[error("window lower bound {lower} precedes the first sample at {first}")]
    WindowBeforeSeries { lower: f64, first: f64 },
    #[error("sample time must be finite, but is {0}")]
    NonFiniteKey(f64),
}

/// Ordered time series describing a step function.
///
/// Each sample `(time, level)` holds its level on `[time, next_time)`; the
/// last level holds indefinitely. Times are unique and kept ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepSeries {
    samples: Vec<(f64, f64)>,
}

impl StepSeries {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Build a series from unordered samples. Later duplicates overwrite earlier ones.
    pub fn from_samples<I>(samples: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut sorted = Vec::new();
        for (time, level) in samples {
            if !time.is_finite() {
                return Err(StatsError::NonFiniteKey(time));
            }
            // Adding zero maps -0.0 to 0.0 so both sort as one key.
            sorted.push((time + 0.0, level));
        }
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut deduped: Vec<(f64, f64)> = Vec::with_capacity(sorted.len());
        for (time, level) in sorted {
            match deduped.last_mut() {
                Some(last) if last.0 == time => last.1 = level,
                _ => deduped.push((time, level)),
            }
        }
        Ok(Self { samples: deduped })
    }

    /// Insert a sample, overwriting the level if `time` is already present.
    pub fn insert(&mut self, time: f64, level: f64) -> Result<(), StatsError> {
        if !time.is_finite() {
            return Err(StatsError::NonFiniteKey(time));
        }
        let idx = self.lower_bound(time);
        match self.samples.get_mut(idx) {
            Some(sample) if sample.0 == time => sample.1 = level,
            _ => self.samples.insert(idx, (time, level)),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.samples.last().copied()
    }

    /// Level held at `time`, or `None` before the first sample.
    pub fn level_at(&self, time: f64) -> Option<f64> {
        let idx = self.samples.partition_point(|&(key, _)| key <= time);
        idx.checked_sub(1).map(|idx| self.samples[idx].1)
    }

    /// Index of the first sample whose time is not less than `time`.
    fn lower_bound(&self, time: f64) -> usize {
        self.samples.partition_point(|&(key, _)| key < time)
    }

    /// Time-weighted average of the step function over `[lower, upper]`.
    ///
    /// See [`step_function_window_average`].
    pub fn window_average(&self, lower: f64, upper: f64) -> Result<f64, StatsError> {
        step_function_window_average(self, lower, upper)
    }
}

/// Compute the time-weighted average of a step function over `[lower, upper]`.
///
/// A level recorded at a sample time holds until the next sample time, so an
/// `upper` bound that coincides with a sample does not pick up that sample's
/// level. A window without any sample strictly inside it returns the held
/// level exactly.
///
/// # Errors
/// Returns an error if the series is empty, if the window is not finite and
/// ordered, or if `lower` precedes the first sample.
pub fn step_function_window_average(
    series: &StepSeries,
    lower: f64,
    upper: f64,
) -> Result<f64, StatsError> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(StatsError::InvalidWindow { lower, upper });
    }
    let samples = series.samples();
    let first = samples.first().ok_or(StatsError::EmptySeries)?.0;
    if lower < first {
        return Err(StatsError::WindowBeforeSeries { lower, first });
    }

    let i_start = series.lower_bound(lower);
    // Since lower >= first and upper > lower, this is at least 1.
    let i_end = series.lower_bound(upper) - 1;
    let i_prior = i_start.saturating_sub(1);

    // Window falls within a single step.
    if i_start > i_end {
        return Ok(samples[i_prior].1);
    }

    let mut first_moment = (samples[i_start].0 - lower) * samples[i_prior].1;
    for pair in samples[i_start..=i_end].windows(2) {
        first_moment += (pair[1].0 - pair[0].0) * pair[0].1;
    }
    first_moment += (upper - samples[i_end].0) * samples[i_end].1;

    Ok(first_moment / (upper - lower))
}

/// Average of a step function over one window.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowReport {
    pub lower: f64,
    pub upper: f64,
    pub average: f64,
}

impl WindowReport {
    pub fn new(series: &StepSeries, lower: f64, upper: f64) -> Result<Self, StatsError> {
        let average = series.window_average(lower, upper)?;
        Ok(Self {
            lower,
            upper,
            average,
        })
    }
}

/// Convert a full width at half maximum to the standard deviation of a normal distribution.
pub fn fwhm_to_std_dev(fwhm: f64) -> f64 {
    fwhm / (2.0 * (2.0 * 2.0_f64.ln()).sqrt())
}
