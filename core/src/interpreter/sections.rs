use crate::interpreter::model::DetailSection;
use regex::Regex;

/// Tagged spans located in a provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSections {
    pub detail_sections: Vec<DetailSection>,
    pub assessment_text: Option<String>,
}

/// Locate the structured-analysis and assessment spans of a response.
///
/// Absent or unmatched tags leave the corresponding field empty; a lone
/// opening tag without its closing pair counts as absent.
pub fn extract_sections(text: &str) -> ExtractedSections {
    let assessment_text = tagged_span(text, "assessment").map(|s| s.to_string());
    let detail_sections = tagged_span(text, "structured_analysis")
        .map(split_numbered_sections)
        .unwrap_or_default();

    ExtractedSections {
        detail_sections,
        assessment_text,
    }
}

/// First `<tag>…</tag>` pair in the text, contents only.
fn tagged_span<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = text.find(&open)? + open.len();
    let end = text[start..].find(&close)?;
    Some(&text[start..start + end])
}

/// Split a structured-analysis body on line-leading "N." markers.
///
/// Text before the first marker is discarded. Sections are renumbered from 1
/// in the order encountered; the first line of each chunk is its title and
/// the remainder its body, both trimmed.
fn split_numbered_sections(body: &str) -> Vec<DetailSection> {
    let marker = match Regex::new(r"(?m)^\s*\d+\.\s*") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let markers: Vec<_> = marker.find_iter(body).collect();
    let mut sections = Vec::new();

    for (i, mat) in markers.iter().enumerate() {
        let chunk_end = if i + 1 < markers.len() {
            markers[i + 1].start()
        } else {
            body.len()
        };
        let chunk = body[mat.end()..chunk_end].trim();
        if chunk.is_empty() {
            continue;
        }

        let mut lines = chunk.lines();
        let title = lines.next().unwrap_or("").trim().to_string();
        let body_text = lines.collect::<Vec<_>>().join("\n").trim().to_string();

        sections.push(DetailSection {
            index: sections.len() + 1,
            title,
            body: body_text,
        });
    }

    sections
}
