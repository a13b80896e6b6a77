//! Parsing of user-supplied baseline readings
//!
//! Turns comma-separated text (as typed on the command line or at a prompt)
//! into temperature readings, weather labels and a time of day.

use crate::models::{TimeOfDay, WeatherLabel};
use crate::{Result, WeathercastError};

/// Input parsing utilities
pub struct InputParser;

impl InputParser {
    /// Parse temperatures like "25, 26, 27"
    ///
    /// With `integers_only`, every reading must be a whole number.
    pub fn parse_temperatures(input: &str, integers_only: bool) -> Result<Vec<f64>> {
        let input = input.trim();
        if input.is_empty() {
            return Err(WeathercastError::invalid_input(
                "Temperature list cannot be empty",
            ));
        }

        input
            .split(',')
            .map(|token| Self::parse_temperature(token.trim(), integers_only))
            .collect()
    }

    fn parse_temperature(token: &str, integers_only: bool) -> Result<f64> {
        if token.is_empty() {
            return Err(WeathercastError::invalid_input(
                "Temperature list contains an empty entry",
            ));
        }

        if integers_only {
            return token.parse::<i64>().map(|t| t as f64).map_err(|_| {
                WeathercastError::invalid_input(format!(
                    "Please ensure temperatures are integers, got: {token}"
                ))
            });
        }

        match token.parse::<f64>() {
            Ok(t) if t.is_finite() => Ok(t),
            _ => Err(WeathercastError::invalid_input(format!(
                "Invalid temperature: {token}"
            ))),
        }
    }

    /// Parse weather labels like "sunny, cloudy"; empty input yields no labels
    pub fn parse_weather_labels(input: &str) -> Result<Vec<WeatherLabel>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Vec::new());
        }

        input
            .split(',')
            .map(|token| -> Result<WeatherLabel> {
                let label: WeatherLabel = token.parse()?;
                if !label.is_observable() {
                    return Err(WeathercastError::invalid_input(format!(
                        "Weather type '{label}' cannot be observed; choose one of: {}",
                        observable_names()
                    )));
                }
                Ok(label)
            })
            .collect()
    }

    /// Parse a time of day, ignoring case and surrounding whitespace
    pub fn parse_time_of_day(input: &str) -> Result<TimeOfDay> {
        input.trim().to_lowercase().parse()
    }

    /// Check that a horizon lies within `1..=max`
    pub fn validate_horizon(horizon: usize, max: usize) -> Result<usize> {
        if !(1..=max).contains(&horizon) {
            return Err(WeathercastError::invalid_input(format!(
                "Number of times to predict must be between 1 and {max}, got: {horizon}"
            )));
        }
        Ok(horizon)
    }
}

fn observable_names() -> String {
    WeatherLabel::OBSERVABLE
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_temperatures() {
        assert_eq!(
            InputParser::parse_temperatures("25,26, 27", false).unwrap(),
            vec![25.0, 26.0, 27.0]
        );
        assert_eq!(
            InputParser::parse_temperatures(" -3.5 , 0.25 ", false).unwrap(),
            vec![-3.5, 0.25]
        );
    }

    #[test]
    fn test_parse_integer_temperatures() {
        assert_eq!(
            InputParser::parse_temperatures("25,26,27", true).unwrap(),
            vec![25.0, 26.0, 27.0]
        );
        let err = InputParser::parse_temperatures("25,26.5", true).unwrap_err();
        assert!(err.to_string().contains("integers"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("25,,27")]
    #[case("25,warm")]
    #[case("inf")]
    #[case("NaN")]
    fn test_parse_temperatures_rejects(#[case] input: &str) {
        let err = InputParser::parse_temperatures(input, false).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_parse_weather_labels() {
        assert_eq!(
            InputParser::parse_weather_labels("sunny, Rainy,cloudy").unwrap(),
            vec![WeatherLabel::Sunny, WeatherLabel::Rainy, WeatherLabel::Cloudy]
        );
        assert!(InputParser::parse_weather_labels("").unwrap().is_empty());
    }

    #[rstest]
    #[case("sunny,hail")]
    #[case("clear")]
    #[case("sunny,,rainy")]
    fn test_parse_weather_labels_rejects(#[case] input: &str) {
        let err = InputParser::parse_weather_labels(input).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(
            InputParser::parse_time_of_day(" Night ").unwrap(),
            TimeOfDay::Night
        );
        assert!(InputParser::parse_time_of_day("dusk").is_err());
    }

    #[rstest]
    #[case(1, true)]
    #[case(10, true)]
    #[case(0, false)]
    #[case(11, false)]
    fn test_validate_horizon(#[case] horizon: usize, #[case] ok: bool) {
        assert_eq!(InputParser::validate_horizon(horizon, 10).is_ok(), ok);
    }
}
