//! Heuristic section/chunk splitter.
//!
//! Partitions the corpus on ALL-CAPS headings, splits each section on
//! blank lines, keeps paragraphs long enough to carry substance, and
//! tags every chunk with a coarse section label.

use corpdesk_core::types::{Chunk, Section};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum trimmed paragraph length (in characters) for a paragraph to
/// become a chunk. Shorter paragraphs are titles or fragments and are
/// dropped silently.
const MIN_CHUNK_CHARS: usize = 100;

/// Matches numbered ALL-CAPS headings ("3. SHAREHOLDING PATTERN") and
/// bolded ALL-CAPS labels ("**INDUSTRY TRENDS**") on their own line.
static HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:\d+[.)][ \t]+[A-Z][A-Z0-9 &/,'\-]{2,}|\*\*[A-Z][A-Z0-9 &/,'\-]{2,}\*\*)[ \t]*$",
    )
    .ok()
});

/// Section keywords tested in priority order; first match wins.
const SECTION_KEYWORDS: &[(&str, Section)] = &[
    ("COMPANY OVERVIEW", Section::CompanyOverview),
    ("FINANCIAL PERFORMANCE", Section::FinancialPerformance),
    ("SHAREHOLDING", Section::Shareholding),
    ("COMPETITOR", Section::Competitors),
    ("INDUSTRY TRENDS", Section::IndustryTrends),
];

/// Split raw corpus text into labeled chunks.
///
/// Never fails on well-formed UTF-8: a corpus without recognizable
/// headings is treated as one general-section segment, and an empty
/// corpus produces an empty chunk set.
pub fn split(raw_text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut next_id: u32 = 0;

    for segment in partition(raw_text) {
        for paragraph in paragraphs(segment.body) {
            if paragraph.chars().count() <= MIN_CHUNK_CHARS {
                continue;
            }
            let section = label_section(segment.heading, paragraph);
            chunks.push(Chunk::new(next_id, paragraph, section));
            next_id += 1;
        }
    }

    tracing::debug!("Split corpus into {} chunks", chunks.len());
    chunks
}

/// A heading-delimited slice of the corpus.
struct Segment<'a> {
    /// The heading line, or "" for the preamble / heading-less corpus.
    heading: &'a str,
    body: &'a str,
}

fn partition(raw_text: &str) -> Vec<Segment<'_>> {
    let Some(heading_re) = HEADING.as_ref() else {
        return vec![Segment { heading: "", body: raw_text }];
    };

    let matches: Vec<_> = heading_re.find_iter(raw_text).collect();
    if matches.is_empty() {
        return vec![Segment { heading: "", body: raw_text }];
    }

    let mut segments = Vec::with_capacity(matches.len() + 1);
    if matches[0].start() > 0 {
        segments.push(Segment { heading: "", body: &raw_text[..matches[0].start()] });
    }
    for (i, m) in matches.iter().enumerate() {
        let body_end = matches.get(i + 1).map_or(raw_text.len(), |next| next.start());
        segments.push(Segment {
            heading: m.as_str().trim(),
            body: &raw_text[m.end()..body_end],
        });
    }
    segments
}

/// Split a segment body on blank-line boundaries into trimmed paragraphs.
fn paragraphs(body: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                let para = body[s..offset].trim();
                if !para.is_empty() {
                    result.push(para);
                }
            }
        } else if start.is_none() {
            start = Some(offset);
        }
        offset += line.len();
    }
    if let Some(s) = start {
        let para = body[s..].trim();
        if !para.is_empty() {
            result.push(para);
        }
    }
    result
}

/// Assign a section label from the segment heading plus the paragraph
/// itself, first matching keyword wins.
fn label_section(heading: &str, paragraph: &str) -> Section {
    let haystack = format!("{} {}", heading, paragraph).to_uppercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, section)| *section)
        .unwrap_or(Section::General)
}
