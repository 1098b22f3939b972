//! T-score classification (WHO convention).

use crate::models::Classification;

/// T-score at or above which density is normal.
pub const NORMAL_THRESHOLD: f64 = -1.0;

/// T-score at or below which density is osteoporotic.
pub const OSTEOPOROSIS_THRESHOLD: f64 = -2.5;

/// Maps a T-score to its diagnostic category.
///
/// Total over `f64`: NaN and infinities fall through to `Osteoporosis`.
/// Request paths reject non-finite scores before calling this.
pub fn classify(t_score: f64) -> Classification {
    if t_score >= NORMAL_THRESHOLD && t_score.is_finite() {
        Classification::Normal
    } else if t_score > OSTEOPOROSIS_THRESHOLD && t_score.is_finite() {
        Classification::Osteopenia
    } else {
        Classification::Osteoporosis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(-1.0), Classification::Normal);
        assert_eq!(classify(-2.5), Classification::Osteoporosis);
    }

    #[test]
    fn test_classify_normal() {
        for t in [-0.99, 0.0, 1.5, 4.0] {
            assert_eq!(classify(t), Classification::Normal, "t = {}", t);
        }
    }

    #[test]
    fn test_classify_osteopenia() {
        for t in [-1.0001, -1.5, -2.0, -2.4999] {
            assert_eq!(classify(t), Classification::Osteopenia, "t = {}", t);
        }
    }

    #[test]
    fn test_classify_osteoporosis() {
        for t in [-2.5001, -3.0, -4.2, -9.9] {
            assert_eq!(classify(t), Classification::Osteoporosis, "t = {}", t);
        }
    }

    #[test]
    fn test_classify_matches_definition_on_grid() {
        let mut t = -6.0;
        while t <= 3.0 {
            let expected = if t >= -1.0 {
                Classification::Normal
            } else if t > -2.5 {
                Classification::Osteopenia
            } else {
                Classification::Osteoporosis
            };
            assert_eq!(classify(t), expected, "t = {}", t);
            t += 0.05;
        }
    }

    #[test]
    fn test_classify_non_finite() {
        assert_eq!(classify(f64::NAN), Classification::Osteoporosis);
        assert_eq!(classify(f64::INFINITY), Classification::Osteoporosis);
        assert_eq!(classify(f64::NEG_INFINITY), Classification::Osteoporosis);
    }
}
