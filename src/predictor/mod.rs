//! Temperature and weather-type prediction
//!
//! This module turns a short baseline of observations into a forecast:
//! - Temperature: linear trend between baseline averages, a time-of-day
//!   offset, then exponential smoothing
//! - Weather type: a per-step draw from the trend table followed by the
//!   time-of-day heuristic, falling back to the most frequent observed label

pub mod smoothing;
pub mod trend_table;

pub use smoothing::{SMOOTHING_FACTOR, exponential_smoothing};
pub use trend_table::{TREND_TABLE, TrendEntry};

use crate::models::{BaselineSeries, PredictionResult, TimeOfDay, WeatherLabel, WeatherLabelSeries};
use crate::{Result, WeathercastError};
use rand::RngExt;
use tracing::{debug, instrument};

/// Extrapolates temperatures and weather types from baseline observations
#[derive(Debug, Clone)]
pub struct Predictor {
    temperatures: BaselineSeries,
    weather: WeatherLabelSeries,
}

impl Predictor {
    /// Create a predictor, validating that the baselines are usable
    pub fn new(
        previous_temperatures: Vec<f64>,
        current_temperatures: Vec<f64>,
        previous_weather: Vec<WeatherLabel>,
        current_weather: Vec<WeatherLabel>,
    ) -> Result<Self> {
        Ok(Self::from_series(
            BaselineSeries::new(previous_temperatures, current_temperatures)?,
            WeatherLabelSeries::new(previous_weather, current_weather)?,
        ))
    }

    #[must_use]
    pub fn from_series(temperatures: BaselineSeries, weather: WeatherLabelSeries) -> Self {
        Self {
            temperatures,
            weather,
        }
    }

    /// Predict `horizon` smoothed temperatures for the given period
    pub fn predict_temperatures(&self, horizon: usize, time_of_day: TimeOfDay) -> Result<Vec<f64>> {
        check_horizon(horizon)?;

        let current_average = self.temperatures.current_average();
        let trend = self.temperatures.trend_per_step();
        let offset = time_of_day.temperature_offset();
        debug!(
            previous_average = self.temperatures.previous_average(),
            current_average, trend, offset, "Extrapolating temperatures"
        );

        let raw: Vec<f64> = (1..=horizon)
            .map(|step| current_average + trend * step as f64 + offset)
            .collect();

        Ok(exponential_smoothing(&raw, SMOOTHING_FACTOR))
    }

    /// Predict `horizon` weather types using the thread-local random source
    pub fn predict_weather_types(
        &self,
        horizon: usize,
        time_of_day: TimeOfDay,
    ) -> Result<Vec<WeatherLabel>> {
        self.predict_weather_types_with_rng(horizon, time_of_day, &mut rand::rng())
    }

    /// Predict `horizon` weather types, drawing trends from `rng`
    pub fn predict_weather_types_with_rng<R: RngExt + ?Sized>(
        &self,
        horizon: usize,
        time_of_day: TimeOfDay,
        rng: &mut R,
    ) -> Result<Vec<WeatherLabel>> {
        check_horizon(horizon)?;

        let preceding = time_of_day.preceding().map(TimeOfDay::as_str);
        let mode = self.weather.mode();

        (0..horizon)
            .map(|_| -> Result<WeatherLabel> {
                let trend = trend_table::draw(&mut *rng);
                let mentions = |period: &str| trend.description.contains(period);

                let next = match time_of_day {
                    TimeOfDay::Morning if mentions(preceding[0]) => WeatherLabel::Foggy,
                    TimeOfDay::Afternoon if mentions(preceding[1]) => WeatherLabel::Sunny,
                    TimeOfDay::Evening if mentions(preceding[2]) => WeatherLabel::Cloudy,
                    TimeOfDay::Night => WeatherLabel::Clear,
                    _ => mode.ok_or_else(|| {
                        WeathercastError::invalid_input(
                            "At least one weather type is required to predict weather outside the night",
                        )
                    })?,
                };
                Ok(next)
            })
            .collect()
    }

    /// Predict temperatures and weather types for `horizon` steps
    pub fn predict(&self, horizon: usize, time_of_day: TimeOfDay) -> Result<PredictionResult> {
        self.predict_with_rng(horizon, time_of_day, &mut rand::rng())
    }

    /// Like [`Self::predict`], drawing trends from `rng`
    #[instrument(skip(self, rng), fields(baseline_len = self.temperatures.len()))]
    pub fn predict_with_rng<R: RngExt + ?Sized>(
        &self,
        horizon: usize,
        time_of_day: TimeOfDay,
        rng: &mut R,
    ) -> Result<PredictionResult> {
        let predicted_temperatures = self.predict_temperatures(horizon, time_of_day)?;
        let predicted_weather = self.predict_weather_types_with_rng(horizon, time_of_day, rng)?;
        debug!(horizon, %time_of_day, "Prediction complete");

        Ok(PredictionResult {
            predicted_temperatures,
            predicted_weather,
        })
    }
}

fn check_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(WeathercastError::invalid_input(
            "Number of times to predict must be at least 1",
        ));
    }
    Ok(())
}
