//! Risk score normalization

/// Bring a backend score onto the 0-100 display scale.
///
/// Scores in `[0, 1]` are read as fractions and scaled; anything else is
/// only rounded, so out-of-range values are displayed as received. An
/// integer score of exactly 0 or 1 cannot be told apart from a fraction and
/// is read as one.
pub fn normalize_score(score: Option<f64>) -> Option<i64> {
    let score = score.filter(|s| s.is_finite())?;

    if (0.0..=1.0).contains(&score) {
        Some(round_half_up(score * 100.0))
    } else {
        Some(round_half_up(score))
    }
}

/// `"{n} / 100"` as shown on the result card
pub fn score_label(score: Option<f64>) -> Option<String> {
    normalize_score(score).map(|n| format!("{} / 100", n))
}

/// `"{n}/100"` or `"-"` as shown in the history table
pub fn score_cell(score: Option<f64>) -> String {
    normalize_score(score)
        .map(|n| format!("{}/100", n))
        .unwrap_or_else(|| "-".to_string())
}

// Halves round toward positive infinity (-2.5 -> -2). `value + 0.5` would
// itself round up just below a half (0.49999999999999994 -> 1).
fn round_half_up(value: f64) -> i64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_scores() {
        assert_eq!(normalize_score(Some(0.42)), Some(42));
        assert_eq!(normalize_score(Some(0.7)), Some(70));
        assert_eq!(normalize_score(Some(0.0)), Some(0));
    }

    #[test]
    fn test_integer_scale_passthrough() {
        assert_eq!(normalize_score(Some(85.0)), Some(85));
        assert_eq!(normalize_score(Some(42.4)), Some(42));
        assert_eq!(normalize_score(Some(150.0)), Some(150));
        assert_eq!(normalize_score(Some(-3.0)), Some(-3));
    }

    #[test]
    fn test_one_is_read_as_fraction() {
        assert_eq!(normalize_score(Some(1.0)), Some(100));
    }

    #[test]
    fn test_missing_score() {
        assert_eq!(normalize_score(None), None);
        assert_eq!(normalize_score(Some(f64::NAN)), None);
        assert_eq!(score_cell(None), "-");
        assert_eq!(score_label(None), None);
    }

    #[test]
    fn test_half_rounding() {
        assert_eq!(normalize_score(Some(0.125)), Some(13));
        assert_eq!(normalize_score(Some(2.5)), Some(3));
        assert_eq!(normalize_score(Some(-2.5)), Some(-2));
        assert_eq!(normalize_score(Some(-50.5)), Some(-50));
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        let below_half = 0.49999999999999994_f64;
        assert!(below_half < 0.5);
        assert_eq!(round_half_up(below_half), 0);
        assert_eq!(round_half_up(-below_half), 0);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(score_label(Some(0.7)).as_deref(), Some("70 / 100"));
        assert_eq!(score_cell(Some(85.0)), "85/100");
    }
}
