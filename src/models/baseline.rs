//! Baseline observations a prediction is extrapolated from

use crate::{Result, WeathercastError};
use serde::{Deserialize, Serialize};

use super::WeatherLabel;

/// Largest accepted reading magnitude in °C
pub const TEMPERATURE_LIMIT: f64 = 1000.0;

/// Previous and current temperature readings in °C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSeries {
    previous: Vec<f64>,
    current: Vec<f64>,
}

impl BaselineSeries {
    /// Build a baseline, rejecting empty, mismatched or out-of-range readings
    pub fn new(previous: Vec<f64>, current: Vec<f64>) -> Result<Self> {
        if previous.is_empty() || current.is_empty() {
            return Err(WeathercastError::invalid_input(
                "Temperature lists must not be empty",
            ));
        }
        if previous.len() != current.len() {
            return Err(WeathercastError::invalid_input(format!(
                "Temperature lists must be of the same length (previous: {}, current: {})",
                previous.len(),
                current.len()
            )));
        }
        // NaN fails the comparison too
        if let Some(bad) = previous
            .iter()
            .chain(&current)
            .find(|t| !(t.abs() <= TEMPERATURE_LIMIT))
        {
            return Err(WeathercastError::invalid_input(format!(
                "Temperature readings must be finite and within ±{TEMPERATURE_LIMIT} °C, got: {bad}"
            )));
        }

        Ok(Self { previous, current })
    }

    #[must_use]
    pub fn previous(&self) -> &[f64] {
        &self.previous
    }

    #[must_use]
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// Number of readings in each series
    #[must_use]
    pub fn len(&self) -> usize {
        self.previous.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }

    #[must_use]
    pub fn previous_average(&self) -> f64 {
        mean(&self.previous)
    }

    #[must_use]
    pub fn current_average(&self) -> f64 {
        mean(&self.current)
    }

    /// Average change per step between the previous and current baselines
    #[must_use]
    pub fn trend_per_step(&self) -> f64 {
        (self.current_average() - self.previous_average()) / self.len() as f64
    }
}

/// Previous and current weather observations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherLabelSeries {
    previous: Vec<WeatherLabel>,
    current: Vec<WeatherLabel>,
}

impl WeatherLabelSeries {
    /// Build a label series; both halves must have the same length
    pub fn new(previous: Vec<WeatherLabel>, current: Vec<WeatherLabel>) -> Result<Self> {
        if previous.len() != current.len() {
            return Err(WeathercastError::invalid_input(format!(
                "Weather type lists must be of the same length (previous: {}, current: {})",
                previous.len(),
                current.len()
            )));
        }
        Ok(Self { previous, current })
    }

    /// Previous labels followed by current labels
    pub fn combined(&self) -> impl Iterator<Item = WeatherLabel> + '_ {
        self.previous.iter().chain(&self.current).copied()
    }

    /// Most frequent label; ties go to the label seen first in [`Self::combined`]
    #[must_use]
    pub fn mode(&self) -> Option<WeatherLabel> {
        let mut counts: Vec<(WeatherLabel, usize)> = Vec::new();
        for label in self.combined() {
            match counts.iter_mut().find(|(seen, _)| *seen == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label, 1)),
            }
        }

        let mut best: Option<(WeatherLabel, usize)> = None;
        for (label, count) in counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }
}

fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    values.iter().map(|v| v / n).sum()
}
