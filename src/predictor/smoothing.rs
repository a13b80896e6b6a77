/// Retention factor used for all temperature smoothing
pub const SMOOTHING_FACTOR: f64 = 0.3;

/// Simple exponential smoothing: `s[0] = x[0]`, `s[t] = α·x[t] + (1−α)·s[t−1]`
#[must_use]
pub fn exponential_smoothing(data: &[f64], alpha: f64) -> Vec<f64> {
    let mut smoothed = Vec::with_capacity(data.len());
    let mut previous: Option<f64> = None;
    for &value in data {
        let next = match previous {
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
            None => value,
        };
        smoothed.push(next);
        previous = Some(next);
    }
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(exponential_smoothing(&[], SMOOTHING_FACTOR).is_empty());
    }

    #[test]
    fn test_first_value_is_kept() {
        let smoothed = exponential_smoothing(&[10.0, 20.0], 0.5);
        assert_eq!(smoothed, vec![10.0, 15.0]);
    }

    #[test]
    fn test_constant_series_is_unchanged() {
        let smoothed = exponential_smoothing(&[4.0; 6], SMOOTHING_FACTOR);
        for value in smoothed {
            assert!((value - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_converges_towards_step_level() {
        let mut data = vec![0.0];
        data.extend([10.0; 40]);
        let smoothed = exponential_smoothing(&data, SMOOTHING_FACTOR);
        assert!(smoothed.windows(2).all(|w| w[1] >= w[0]));
        assert!((smoothed[40] - 10.0).abs() < 1e-4);
    }
}
