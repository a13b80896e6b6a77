//! Time-of-day periods and their fixed temperature adjustments

use crate::WeathercastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four daily periods a prediction can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// All periods in cyclic order, starting with morning
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Lowercase name as accepted by [`FromStr`]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    fn position(self) -> usize {
        match self {
            TimeOfDay::Morning => 0,
            TimeOfDay::Afternoon => 1,
            TimeOfDay::Evening => 2,
            TimeOfDay::Night => 3,
        }
    }

    /// The three periods that cyclically precede this one, nearest first
    #[must_use]
    pub fn preceding(self) -> [TimeOfDay; 3] {
        let len = Self::ALL.len();
        let at = |back: usize| Self::ALL[(self.position() + len - back) % len];
        [at(1), at(2), at(3)]
    }

    /// Additive temperature adjustment in °C applied to every raw prediction
    #[must_use]
    pub fn temperature_offset(self) -> f64 {
        match self {
            TimeOfDay::Morning => -2.0,
            TimeOfDay::Afternoon => 2.0,
            TimeOfDay::Evening => -1.0,
            TimeOfDay::Night => -3.0,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = WeathercastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| {
                WeathercastError::invalid_input(format!(
                    "Invalid time of day '{s}'. Must be one of: morning, afternoon, evening, night"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TimeOfDay::Morning, [TimeOfDay::Night, TimeOfDay::Evening, TimeOfDay::Afternoon])]
    #[case(TimeOfDay::Afternoon, [TimeOfDay::Morning, TimeOfDay::Night, TimeOfDay::Evening])]
    #[case(TimeOfDay::Evening, [TimeOfDay::Afternoon, TimeOfDay::Morning, TimeOfDay::Night])]
    #[case(TimeOfDay::Night, [TimeOfDay::Evening, TimeOfDay::Afternoon, TimeOfDay::Morning])]
    fn test_preceding_periods(#[case] period: TimeOfDay, #[case] expected: [TimeOfDay; 3]) {
        assert_eq!(period.preceding(), expected);
    }

    #[rstest]
    #[case(TimeOfDay::Morning, -2.0)]
    #[case(TimeOfDay::Afternoon, 2.0)]
    #[case(TimeOfDay::Evening, -1.0)]
    #[case(TimeOfDay::Night, -3.0)]
    fn test_temperature_offsets(#[case] period: TimeOfDay, #[case] offset: f64) {
        assert_eq!(period.temperature_offset(), offset);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for period in TimeOfDay::ALL {
            assert_eq!(period.to_string().parse::<TimeOfDay>().unwrap(), period);
        }
    }

    #[rstest]
    #[case("noon")]
    #[case("")]
    #[case("Morning")]
    fn test_parse_rejects_unknown_period(#[case] input: &str) {
        let err = input.parse::<TimeOfDay>().unwrap_err();
        assert!(err.is_invalid_input());
    }
}
