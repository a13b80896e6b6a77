//! Fixed table of weather trends drawn from during weather-type prediction

use rand::RngExt;

/// A weighted, human-readable weather trend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendEntry {
    pub weight: f64,
    pub description: &'static str,
}

pub const TREND_TABLE: [TrendEntry; 10] = [
    TrendEntry { weight: 0.2, description: "Gradual increase in temperature." },
    TrendEntry { weight: -0.1, description: "Slight decrease in temperature." },
    TrendEntry { weight: 0.05, description: "Stable temperature with minor fluctuations." },
    TrendEntry { weight: 0.3, description: "Steady increase followed by rain." },
    TrendEntry { weight: -0.2, description: "Gradual cooling and possible clouds." },
    TrendEntry { weight: 0.1, description: "Slight increase and sunny weather." },
    TrendEntry { weight: 0.15, description: "Increase with humidity rising." },
    TrendEntry { weight: -0.25, description: "Cooler with chances of frost." },
    TrendEntry { weight: 0.0, description: "Stable weather without significant changes." },
    TrendEntry { weight: -0.05, description: "Slight cooling with intermittent clouds." },
];

/// Draw a uniformly random entry from [`TREND_TABLE`]
pub fn draw<R: RngExt + ?Sized>(rng: &mut R) -> &'static TrendEntry {
    &TREND_TABLE[rng.random_range(0..TREND_TABLE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_draw_returns_table_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let entry = draw(&mut rng);
            assert!(TREND_TABLE.contains(entry));
        }
    }

    #[test]
    fn test_descriptions_never_name_a_period() {
        for entry in &TREND_TABLE {
            for period in TimeOfDay::ALL {
                assert!(!entry.description.contains(period.as_str()));
            }
        }
    }
}
