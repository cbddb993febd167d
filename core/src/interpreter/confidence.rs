use regex::Regex;

const PROBABILITY_PATTERN: &str = r"(?i)probability (?:of it being real )?is (\d+\.\d+)";
const PERCENT_PATTERN: &str = r"(\d+)%";
const REAL_FRAMING: &str = "probability of it being real";

/// Extract the confidence score for the resolved classification.
///
/// A decimal probability figure wins over a percentage; returns None when the
/// text carries no numeric signal at all.
pub fn extract_confidence(text: &str, is_fake: bool) -> Option<f32> {
    if let Some(value) = decimal_probability(text) {
        // A probability framed as "of it being real" is the complement of
        // the fake conclusion's confidence.
        if is_fake && text.contains(REAL_FRAMING) {
            return Some(1.0 - value);
        }
        return Some(value);
    }
    percent_figure(text)
}

/// Clamp a confidence score into [0, 1].
pub fn clamp_confidence(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

fn decimal_probability(text: &str) -> Option<f32> {
    let re = Regex::new(PROBABILITY_PATTERN).ok()?;
    let caps = re.captures(text)?;
    caps.get(1)?.as_str().parse::<f32>().ok()
}

fn percent_figure(text: &str) -> Option<f32> {
    let re = Regex::new(PERCENT_PATTERN).ok()?;
    let caps = re.captures(text)?;
    let percent = caps.get(1)?.as_str().parse::<f32>().ok()?;
    Some(percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_probability() {
        let value = extract_confidence("the probability is 0.93", false).unwrap();
        assert!((value - 0.93).abs() < 1e-6);
    }

    #[test]
    fn test_real_probability_inverted_when_fake() {
        let value =
            extract_confidence("the probability of it being real is 0.20", true).unwrap();
        assert!((value - 0.80).abs() < 1e-6);
    }

    #[test]
    fn test_real_probability_not_inverted_when_real() {
        let value =
            extract_confidence("the probability of it being real is 0.20", false).unwrap();
        assert!((value - 0.20).abs() < 1e-6);
    }

    #[test]
    fn test_percentage_fallback() {
        let value = extract_confidence("87% confidence", false).unwrap();
        assert!((value - 0.87).abs() < 1e-6);
    }

    #[test]
    fn test_probability_wins_over_percentage() {
        let value = extract_confidence("probability is 0.93, about 50%", false).unwrap();
        assert!((value - 0.93).abs() < 1e-6);
    }

    #[test]
    fn test_no_numeric_signal() {
        assert!(extract_confidence("no numbers at all", false).is_none());
        assert!(extract_confidence("section 3 was checked", true).is_none());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_confidence(1.5), 1.0);
        assert_eq!(clamp_confidence(-0.2), 0.0);
        assert_eq!(clamp_confidence(0.5), 0.5);
    }
}
