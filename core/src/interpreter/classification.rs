use crate::interpreter::model::Likelihood;

/// Explicit statements that the media is AI-generated. Checked first.
const AI_GENERATED_PHRASES: &[&str] = &[
    "high likelihood of this media being AI-generated",
    "deemed as AI-generated",
];

/// Explicit statements that the media is authentic. Checked second.
const AUTHENTIC_PHRASES: &[&str] = &[
    "probably real",
    "passed the AI detection",
];

/// Resolve the binary classification, first match wins:
/// explicit AI-generated phrase, explicit authenticity phrase, assessment
/// likelihood, then the default assumption of authenticity.
pub fn resolve_is_fake(text: &str, likelihood: Likelihood) -> bool {
    if AI_GENERATED_PHRASES.iter().any(|p| text.contains(p)) {
        return true;
    }
    if AUTHENTIC_PHRASES.iter().any(|p| text.contains(p)) {
        return false;
    }
    match likelihood {
        Likelihood::High => true,
        Likelihood::Low | Likelihood::Unsure => false,
    }
}
