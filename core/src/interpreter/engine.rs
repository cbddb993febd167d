use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};
use crate::interpreter::assessment::{extract_likelihood, extract_malicious_intent};
use crate::interpreter::classification::resolve_is_fake;
use crate::interpreter::confidence::{clamp_confidence, extract_confidence};
use crate::interpreter::model::{AnalysisVerdict, Likelihood, MaliciousIntent};
use crate::interpreter::sections::extract_sections;

/// Confidence assigned when the text carries no numeric signal. Strong
/// qualitative language upstream is assumed to have already conveyed high
/// confidence, so the absence of a number is not read as uncertainty.
pub const DEFAULT_CONFIDENCE: f32 = 0.8;

/// Fallback policy for the interpretation pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpretConfig {
    /// Confidence used when no probability or percentage is found
    /// (default: [`DEFAULT_CONFIDENCE`]).
    pub default_confidence: f32,
}

impl Default for InterpretConfig {
    fn default() -> Self {
        Self {
            default_confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl InterpretConfig {
    pub fn with_default_confidence(default_confidence: f32) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&default_confidence) {
            return Err(CoreError::InvalidInput(format!(
                "default confidence must be within [0, 1], got {}",
                default_confidence
            )));
        }
        Ok(Self { default_confidence })
    }
}

/// Interpret one analysis-provider response with the default configuration.
pub fn interpret(text: &str) -> AnalysisVerdict {
    interpret_with_config(text, &InterpretConfig::default())
}

/// Interpret one analysis-provider response.
///
/// Never fails: unrecognized or malformed input degrades to Unsure/default
/// field values, so the caller always receives a displayable verdict. Pure
/// and deterministic; identical input yields an identical verdict.
pub fn interpret_with_config(text: &str, config: &InterpretConfig) -> AnalysisVerdict {
    let sections = extract_sections(text);

    let (likelihood, malicious_intent) = match sections.assessment_text.as_deref() {
        Some(assessment) => (
            extract_likelihood(assessment),
            extract_malicious_intent(assessment),
        ),
        None => (Likelihood::Unsure, MaliciousIntent::Unsure),
    };

    let is_fake = resolve_is_fake(text, likelihood);

    let confidence = clamp_confidence(
        extract_confidence(text, is_fake).unwrap_or(config.default_confidence),
    );

    AnalysisVerdict {
        verdict_id: verdict_id(text),
        likelihood,
        malicious_intent,
        is_fake,
        confidence,
        detail_sections: sections.detail_sections,
        assessment_text: sections.assessment_text,
        raw_text: text.to_string(),
    }
}

/// Deterministic verdict id from a truncated content hash.
fn verdict_id(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("v_{}", &digest[..12])
}
