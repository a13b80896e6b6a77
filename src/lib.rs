//! `weathercast` - Heuristic temperature and weather-type prediction
//!
//! This library extrapolates short baselines of temperature readings and
//! weather observations into predicted temperatures and weather types, and
//! provides the parsing, rendering and progress presentation around it.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod predictor;
pub mod progress;
pub mod render;

// Re-export core types for public API
pub use config::WeathercastConfig;
pub use error::WeathercastError;
pub use input::InputParser;
pub use models::{PredictionReport, PredictionResult, TimeOfDay, WeatherLabel};
pub use predictor::Predictor;
pub use progress::{ConsoleProgress, ProgressAnimation, ProgressSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeathercastError>;
