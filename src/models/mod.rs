//! Data models for the weathercast crate
//!
//! This module contains the core domain models organized by concern:
//! - Baseline: previous/current temperature readings and weather observations
//! - Time of day: the four daily periods and their offsets
//! - Weather label: the closed set of weather categories
//! - Prediction: predicted sequences and reports

pub mod baseline;
pub mod prediction;
pub mod time_of_day;
pub mod weather_label;

// Re-export all public types for convenient access
pub use baseline::{BaselineSeries, WeatherLabelSeries};
pub use prediction::{PredictedStep, PredictionReport, PredictionResult};
pub use time_of_day::TimeOfDay;
pub use weather_label::WeatherLabel;
