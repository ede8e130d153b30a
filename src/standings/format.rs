use super::types::Score;

pub const NO_DIFFERENCE: &str = "-";
pub const ZERO_PERCENT: &str = "0%";

/// `numerator / denominator` as a percentage with one decimal place.
/// A zero denominator renders as the literal `"0%"`.
pub fn format_percentage(numerator: i64, denominator: i64) -> String {
    if denominator == 0 {
        return ZERO_PERCENT.to_string();
    }
    let ratio = numerator as f64 / denominator as f64 * 100.0;
    format!("{:.1}%", ratio)
}

pub fn format_difference(reference: Score, score: Score) -> String {
    (reference - score).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_has_one_decimal() {
        assert_eq!(format_percentage(4, 10), "40.0%");
        assert_eq!(format_percentage(1, 3), "33.3%");
        assert_eq!(format_percentage(2, 3), "66.7%");
    }

    #[test]
    fn test_percentage_of_zero_denominator() {
        assert_eq!(format_percentage(0, 0), "0%");
        assert_eq!(format_percentage(5, 0), "0%");
    }

    #[test]
    fn test_difference_is_plain_integer() {
        assert_eq!(format_difference(20, 15), "5");
        assert_eq!(format_difference(15, 15), "0");
    }
}
