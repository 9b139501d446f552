//! Score rounding
//!
//! Scores are rounded to three decimals, half away from zero
//! (`0.0625 -> 0.063`, `-0.0625 -> -0.063`). Negative zero is folded into
//! `0.0` so equal scores compare equal in the descending sort.

/// Decimal digits kept in a stored score
pub const SCORE_DECIMALS: i32 = 3;

/// Round to [`SCORE_DECIMALS`] digits. Values too large to scale have no
/// fractional part left and are returned as they are.
pub fn round_score(value: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value + 0.0;
    }
    scaled.round() / scale + 0.0
}

/// Descending order on scores, for use with a stable sort
pub fn descending(a: f64, b: f64) -> std::cmp::Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_decimals() {
        assert_eq!(round_score(0.81), 0.81);
        assert_eq!(round_score(0.123456), 0.123);
        assert_eq!(round_score(0.9996), 1.0);
    }

    #[test]
    fn test_ties_away_from_zero() {
        // 0.0625 and 62.5 are exact in binary, so this is a true tie
        assert_eq!(round_score(0.0625), 0.063);
        assert_eq!(round_score(-0.0625), -0.063);
    }

    #[test]
    fn test_negative_zero_folded() {
        let rounded = round_score(-0.0001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert_eq!(descending(rounded, 0.0), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_huge_values_stay_finite() {
        assert_eq!(round_score(1e306), 1e306);
        assert_eq!(round_score(-f64::MAX), -f64::MAX);
        assert!(round_score(f64::MAX).is_finite());
    }

    #[test]
    fn test_descending() {
        let mut scores = vec![0.2, 0.9, 0.5];
        scores.sort_by(|a, b| descending(*a, *b));
        assert_eq!(scores, vec![0.9, 0.5, 0.2]);
    }
}
