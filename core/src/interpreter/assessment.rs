use crate::interpreter::model::{Likelihood, MaliciousIntent};
use regex::Regex;

const LIKELIHOOD_PATTERN: &str = r"Likelihood of AI generation/manipulation: (High|Low|Unsure)";
const INTENT_PATTERN: &str = r"Potential malicious intent: (Yes|No|Unsure)";

/// Read the likelihood line out of an assessment span. Unmatched -> Unsure.
pub fn extract_likelihood(assessment: &str) -> Likelihood {
    match captured_value(assessment, LIKELIHOOD_PATTERN).as_deref() {
        Some("High") => Likelihood::High,
        Some("Low") => Likelihood::Low,
        _ => Likelihood::Unsure,
    }
}

/// Read the malicious-intent line out of an assessment span. Unmatched -> Unsure.
pub fn extract_malicious_intent(assessment: &str) -> MaliciousIntent {
    match captured_value(assessment, INTENT_PATTERN).as_deref() {
        Some("Yes") => MaliciousIntent::Yes,
        Some("No") => MaliciousIntent::No,
        _ => MaliciousIntent::Unsure,
    }
}

fn captured_value(text: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
