use serde::{Deserialize, Serialize};

/// AI-generation/manipulation likelihood stated in an assessment span.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Likelihood {
    High,
    Low,
    Unsure,
}

/// Malicious-intent flag stated in an assessment span.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaliciousIntent {
    Yes,
    No,
    Unsure,
}

/// One numbered sub-section of a structured analysis span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailSection {
    pub index: usize,
    pub title: String,
    pub body: String,
}

/// Structured verdict derived from one analysis-provider response.
///
/// Built once per response and never mutated. `raw_text` keeps the original
/// input so consumers can fall back to displaying it verbatim when neither
/// tagged span was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisVerdict {
    pub verdict_id: String,
    pub likelihood: Likelihood,
    pub malicious_intent: MaliciousIntent,
    pub is_fake: bool,
    pub confidence: f32,
    pub detail_sections: Vec<DetailSection>,
    pub assessment_text: Option<String>,
    pub raw_text: String,
}

impl AnalysisVerdict {
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Qualitative band derived from the numeric confidence score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceBand {
    VeryHigh,
    High,
    Moderate,
    Low,
    VeryLow,
}

impl ConfidenceBand {
    /// Map a confidence score to its band. Lower bounds are inclusive, so
    /// the mapping is total over [0, 1] with no gaps or overlaps.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.90 {
            ConfidenceBand::VeryHigh
        } else if confidence >= 0.75 {
            ConfidenceBand::High
        } else if confidence >= 0.60 {
            ConfidenceBand::Moderate
        } else if confidence >= 0.40 {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBand::VeryHigh => "Very High",
            ConfidenceBand::High => "High",
            ConfidenceBand::Moderate => "Moderate",
            ConfidenceBand::Low => "Low",
            ConfidenceBand::VeryLow => "Very Low",
        }
    }
}
