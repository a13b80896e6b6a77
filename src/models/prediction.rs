//! Prediction output model and display methods

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TimeOfDay, WeatherLabel};

/// Parallel sequences of predicted temperatures and weather types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Smoothed temperatures in °C, one per step
    pub predicted_temperatures: Vec<f64>,
    /// Weather types, one per step
    pub predicted_weather: Vec<WeatherLabel>,
}

/// A single positional step of a [`PredictionResult`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedStep {
    /// 1-based step number
    pub time: usize,
    pub temperature: f64,
    pub weather: WeatherLabel,
}

impl PredictedStep {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.2} °C", self.temperature)
    }

    /// Format weather type with its icon
    #[must_use]
    pub fn format_weather(&self) -> String {
        format!("{} {}", self.weather.icon(), self.weather.display_name())
    }
}

impl PredictionResult {
    /// Number of predicted steps
    #[must_use]
    pub fn horizon(&self) -> usize {
        self.predicted_temperatures.len()
    }

    /// Pair temperatures and weather types positionally
    pub fn steps(&self) -> impl Iterator<Item = PredictedStep> + '_ {
        self.predicted_temperatures
            .iter()
            .zip(&self.predicted_weather)
            .enumerate()
            .map(|(i, (&temperature, &weather))| PredictedStep {
                time: i + 1,
                temperature,
                weather,
            })
    }
}

/// A prediction together with the request that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub horizon: usize,
    pub time_of_day: TimeOfDay,
    #[serde(flatten)]
    pub result: PredictionResult,
    /// When this prediction was generated
    pub generated_at: DateTime<Utc>,
}

impl PredictionReport {
    #[must_use]
    pub fn new(time_of_day: TimeOfDay, result: PredictionResult) -> Self {
        Self {
            horizon: result.horizon(),
            time_of_day,
            result,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PredictionResult {
        PredictionResult {
            predicted_temperatures: vec![27.0, 27.3],
            predicted_weather: vec![WeatherLabel::Clear, WeatherLabel::Sunny],
        }
    }

    #[test]
    fn test_steps_are_numbered_from_one() {
        let steps: Vec<_> = sample().steps().collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].time, 1);
        assert_eq!(steps[1].weather, WeatherLabel::Sunny);
        assert_eq!(steps[1].format_temperature(), "27.30 °C");
        assert_eq!(steps[1].format_weather(), "☀️ Sunny");
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = PredictionReport::new(TimeOfDay::Night, sample());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["horizon"], 2);
        assert_eq!(json["time_of_day"], "night");
        assert_eq!(json["predicted_weather"][0], "clear");
        assert!(json.get("generated_at").is_some());
    }
}
