use crate::error::CoreResult;
use crate::interpreter::model::{AnalysisVerdict, Likelihood, MaliciousIntent};

/// Headline keyed on the assessment likelihood.
pub fn headline(verdict: &AnalysisVerdict) -> &'static str {
    match verdict.likelihood {
        Likelihood::High => "Likely AI-Generated Content",
        Likelihood::Low => "Likely Authentic Content",
        Likelihood::Unsure => "Analysis Inconclusive",
    }
}

/// One-line malicious-intent summary.
pub fn intent_summary(verdict: &AnalysisVerdict) -> &'static str {
    match verdict.malicious_intent {
        MaliciousIntent::Yes => "Potential malicious intent detected",
        MaliciousIntent::No => "No malicious intent detected",
        MaliciousIntent::Unsure => "Malicious intent assessment inconclusive",
    }
}

/// Label for the resolved binary classification.
pub fn classification_label(verdict: &AnalysisVerdict) -> &'static str {
    if verdict.is_fake {
        "AI-Generated"
    } else {
        "Authentic"
    }
}

/// Confidence as a rounded percentage.
pub fn confidence_percent(verdict: &AnalysisVerdict) -> u32 {
    (verdict.confidence * 100.0).round() as u32
}

/// Render a deterministic markdown report of the verdict.
///
/// When neither tagged span was found in the input, the raw provider text is
/// emitted as the body so consumers always have something to display.
pub fn render_markdown(verdict: &AnalysisVerdict) -> String {
    let mut lines = vec![
        format!("# {}", headline(verdict)),
        "".to_string(),
        format!(
            "{} ({}% confidence, {})",
            classification_label(verdict),
            confidence_percent(verdict),
            verdict.confidence_band().label(),
        ),
        intent_summary(verdict).to_string(),
    ];

    if !verdict.detail_sections.is_empty() {
        lines.push("".to_string());
        lines.push("## Detailed Analysis".to_string());
        for section in &verdict.detail_sections {
            lines.push("".to_string());
            lines.push(format!("### {}. {}", section.index, section.title));
            if !section.body.is_empty() {
                lines.push(section.body.clone());
            }
        }
    }

    if let Some(assessment) = &verdict.assessment_text {
        lines.push("".to_string());
        lines.push("## Assessment".to_string());
        lines.push(assessment.trim().to_string());
    }

    if verdict.detail_sections.is_empty() && verdict.assessment_text.is_none() {
        lines.push("".to_string());
        lines.push(verdict.raw_text.clone());
    }

    lines.join("\n")
}

/// Serialize the verdict for transport to a presentation layer.
pub fn verdict_json(verdict: &AnalysisVerdict) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(verdict)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::engine::interpret;

    #[test]
    fn test_headline_per_likelihood() {
        let high = interpret(
            "<assessment>Likelihood of AI generation/manipulation: High</assessment>",
        );
        assert_eq!(headline(&high), "Likely AI-Generated Content");

        let low = interpret(
            "<assessment>Likelihood of AI generation/manipulation: Low</assessment>",
        );
        assert_eq!(headline(&low), "Likely Authentic Content");

        let unsure = interpret("nothing recognizable");
        assert_eq!(headline(&unsure), "Analysis Inconclusive");
    }

    #[test]
    fn test_classification_label() {
        let fake = interpret("deemed as AI-generated");
        assert_eq!(classification_label(&fake), "AI-Generated");

        let real = interpret("passed the AI detection tests");
        assert_eq!(classification_label(&real), "Authentic");
    }

    #[test]
    fn test_confidence_percent_rounds() {
        let verdict = interpret("87% confidence");
        assert_eq!(confidence_percent(&verdict), 87);
    }

    #[test]
    fn test_markdown_falls_back_to_raw_text() {
        let verdict = interpret("Inconclusive results.");
        let markdown = render_markdown(&verdict);
        assert!(markdown.contains("# Analysis Inconclusive"));
        assert!(markdown.contains("Inconclusive results."));
    }

    #[test]
    fn test_markdown_includes_sections_and_assessment() {
        let text = "<structured_analysis>1. Lighting\nInconsistent shadows</structured_analysis>\
                    <assessment>Likelihood of AI generation/manipulation: High</assessment>";
        let verdict = interpret(text);
        let markdown = render_markdown(&verdict);

        assert!(markdown.contains("## Detailed Analysis"));
        assert!(markdown.contains("### 1. Lighting"));
        assert!(markdown.contains("## Assessment"));
        // Raw-text fallback must not kick in when structure was found.
        assert!(!markdown.contains("<structured_analysis>"));
    }

    #[test]
    fn test_verdict_json_round_trips() {
        let verdict = interpret("deemed as AI-generated, probability is 0.93");
        let json = verdict_json(&verdict).unwrap();
        let parsed: AnalysisVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, verdict);
    }
}
