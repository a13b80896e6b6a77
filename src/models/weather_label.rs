//! Categorical weather labels

use crate::WeathercastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A weather category, either observed or predicted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherLabel {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Windy,
    /// Only ever produced by the prediction heuristic
    Foggy,
    /// Only ever produced by the prediction heuristic
    Clear,
}

impl WeatherLabel {
    /// Labels a caller may supply as observations
    pub const OBSERVABLE: [WeatherLabel; 6] = [
        WeatherLabel::Sunny,
        WeatherLabel::Cloudy,
        WeatherLabel::Rainy,
        WeatherLabel::Stormy,
        WeatherLabel::Snowy,
        WeatherLabel::Windy,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherLabel::Sunny => "sunny",
            WeatherLabel::Cloudy => "cloudy",
            WeatherLabel::Rainy => "rainy",
            WeatherLabel::Stormy => "stormy",
            WeatherLabel::Snowy => "snowy",
            WeatherLabel::Windy => "windy",
            WeatherLabel::Foggy => "foggy",
            WeatherLabel::Clear => "clear",
        }
    }

    /// Label with its first letter capitalized, e.g. "Sunny"
    #[must_use]
    pub fn display_name(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Emoji shown next to the label; labels without one get a question mark
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            WeatherLabel::Sunny => "☀️",
            WeatherLabel::Cloudy => "☁️",
            WeatherLabel::Rainy => "🌧️",
            WeatherLabel::Stormy => "⛈️",
            WeatherLabel::Snowy => "❄️",
            WeatherLabel::Windy => "🌬️",
            WeatherLabel::Foggy | WeatherLabel::Clear => "❓",
        }
    }

    /// Whether callers may supply this label as an observation
    #[must_use]
    pub fn is_observable(self) -> bool {
        Self::OBSERVABLE.contains(&self)
    }
}

impl fmt::Display for WeatherLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherLabel {
    type Err = WeathercastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "sunny" => Ok(WeatherLabel::Sunny),
            "cloudy" => Ok(WeatherLabel::Cloudy),
            "rainy" => Ok(WeatherLabel::Rainy),
            "stormy" => Ok(WeatherLabel::Stormy),
            "snowy" => Ok(WeatherLabel::Snowy),
            "windy" => Ok(WeatherLabel::Windy),
            "foggy" => Ok(WeatherLabel::Foggy),
            "clear" => Ok(WeatherLabel::Clear),
            _ => Err(WeathercastError::invalid_input(format!(
                "Unknown weather type '{}'",
                s.trim()
            ))),
        }
    }
}
