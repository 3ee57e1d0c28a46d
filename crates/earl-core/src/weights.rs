//! Weight-map helpers — distribution math for the agent's action weights.

use rand::Rng;

/// Normalize a sequence of non-negative reals into a probability
/// distribution.
///
/// Each element is divided by the total. A total of exactly zero (a
/// degenerate map, possible when mutation and clipping drive every
/// weight to 0) falls back to the uniform distribution rather than
/// failing. Callers guarantee non-empty input.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();

    if total != 0.0 {
        values.iter().map(|v| v / total).collect()
    } else {
        let n = values.len();
        vec![1.0 / n as f64; n]
    }
}

/// Population variance (mean of squared deviations from the mean).
///
/// Returns 0 for empty input so cadence adjustment stays well-defined.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Clip a weight into [0, 1]. Applied on every weight write.
pub fn clip(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Draw a fresh random weight map over `n` actions, normalized to a
/// probability distribution.
pub fn random_distribution<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    let raw: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
    normalize(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOL: f64 = 1e-9;

    #[test]
    fn normalize_sums_to_one() {
        let d = normalize(&[1.0, 2.0, 3.0, 4.0]);
        let sum: f64 = d.iter().sum();
        assert!((sum - 1.0).abs() < TOL);
        assert!((d[3] - 0.4).abs() < TOL);
    }

    #[test]
    fn normalize_all_zero_falls_back_to_uniform() {
        let d = normalize(&[0.0, 0.0, 0.0, 0.0]);
        for w in &d {
            assert!((w - 0.25).abs() < TOL);
        }
    }

    #[test]
    fn normalize_single_element_is_one() {
        assert!((normalize(&[0.37])[0] - 1.0).abs() < TOL);
        assert!((normalize(&[0.0])[0] - 1.0).abs() < TOL);
    }

    #[test]
    fn variance_of_empty_is_zero() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn variance_of_constant_is_zero() {
        assert!(variance(&[0.5, 0.5, 0.5]).abs() < TOL);
    }

    #[test]
    fn variance_is_shift_invariant() {
        let a = [0.1, 0.4, 0.9, 0.2];
        let shifted: Vec<f64> = a.iter().map(|v| v + 10.0).collect();
        assert!((variance(&a) - variance(&shifted)).abs() < TOL);
    }

    #[test]
    fn clip_bounds_both_sides() {
        assert_eq!(clip(-0.3), 0.0);
        assert_eq!(clip(1.7), 1.0);
        assert_eq!(clip(0.42), 0.42);
    }

    #[test]
    fn random_distribution_is_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        let d = random_distribution(5, &mut rng);
        assert_eq!(d.len(), 5);
        let sum: f64 = d.iter().sum();
        assert!((sum - 1.0).abs() < TOL);
        assert!(d.iter().all(|w| (0.0..=1.0).contains(w)));
    }
}
