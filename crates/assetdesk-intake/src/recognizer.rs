//! Named-entity recognition seam.
//!
//! The extractor only needs spans labelled as organization, location, or
//! person. Anything that can produce those (a statistical tagger behind an
//! FFI boundary, a remote service, a test stub) implements [`EntityRecognizer`].
//! [`PatternRecognizer`] is the built-in rule-based implementation.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Category assigned to a recognized span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Organization,
    Location,
    Person,
    /// Any other tag; ignored by the extractor.
    Other(String),
}

impl EntityLabel {
    /// Map a conventional NER tag (`ORG`, `GPE`, `PERSON`, ...) to a label.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            "GPE" | "LOC" | "LOCATION" | "FAC" => EntityLabel::Location,
            "PERSON" | "PER" => EntityLabel::Person,
            _ => EntityLabel::Other(tag.to_string()),
        }
    }
}

/// A labelled span of the input text. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn new(label: EntityLabel, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label,
            text: text.into(),
            start,
            end,
        }
    }
}

/// Labels spans of text with entity categories.
pub trait EntityRecognizer {
    /// Spans in document order.
    fn recognize(&self, text: &str) -> Vec<EntitySpan>;
}

impl<R: EntityRecognizer + ?Sized> EntityRecognizer for &R {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        (**self).recognize(text)
    }
}

impl<R: EntityRecognizer + ?Sized> EntityRecognizer for Box<R> {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        (**self).recognize(text)
    }
}

// ============================================================================
// Rule-based recognizer
// ============================================================================

/// One recognition rule: the text of capture `group` becomes a span labelled `label`.
#[derive(Debug, Clone)]
pub struct RecognitionPattern {
    pub name: String,
    pub label: EntityLabel,
    pub regex: Regex,
    pub group: usize,
}

/// Default rules for request emails.
pub fn request_patterns() -> Vec<RecognitionPattern> {
    vec![
        // "the HR department", "Product Development Department"
        RecognitionPattern {
            name: "department_suffix".to_string(),
            label: EntityLabel::Organization,
            regex: Regex::new(
                r"\b((?:[A-Z][\w&]*[ \t]+){0,3}?[A-Z][\w&]*)[ \t]+(?i:department)\b",
            )
            .unwrap(),
            group: 1,
        },
        // "Department of Facilities"
        RecognitionPattern {
            name: "department_of".to_string(),
            label: EntityLabel::Organization,
            regex: Regex::new(
                r"(?i:department[ \t]+of)[ \t]+([A-Z][\w&]*(?:[ \t]+[A-Z][\w&]*){0,3})",
            )
            .unwrap(),
            group: 1,
        },
        // "Room 101", "Rm. 4B", "Suite 200", "Lab 3"
        RecognitionPattern {
            name: "room_number".to_string(),
            label: EntityLabel::Location,
            regex: Regex::new(
                r"\b((?:Room|ROOM|room|Rm\.?|Suite|Lab)[ \t]+#?[A-Z]?\d+[A-Za-z]?)\b",
            )
            .unwrap(),
            group: 1,
        },
        // "used by John Doe", "assigned to Jane Roe", "Advisor: Ann Lee"
        RecognitionPattern {
            name: "person_cue".to_string(),
            label: EntityLabel::Person,
            regex: Regex::new(
                r"(?i:used[ \t]+by|assigned[ \t]+to|on[ \t]+behalf[ \t]+of|advisor(?:[ \t]+is)?[ \t]*:?)[ \t]+([A-Z][a-z'\-]+(?:[ \t]+[A-Z][a-z'\-]+){1,2})",
            )
            .unwrap(),
            group: 1,
        },
        // Sign-off line followed by a full name on the next line.
        RecognitionPattern {
            name: "person_signoff".to_string(),
            label: EntityLabel::Person,
            regex: Regex::new(
                r"(?m)^[ \t]*(?i:best[ \t]+regards|regards|thanks|thank[ \t]+you|sincerely|cheers),?[ \t]*\r?\n[ \t]*([A-Z][a-z'\-]+(?:[ \t]+[A-Z][a-z'\-]+){1,2})[ \t]*\r?$",
            )
            .unwrap(),
            group: 1,
        },
    ]
}

/// Greeting and sign-off words that a capitalized-word run can swallow
/// ("Hello IT Department").
const LEADING_FILLER: &[&str] = &[
    "Hello", "Hi", "Hey", "Dear", "Greetings", "Thanks", "Thank", "Regards", "Cheers", "Please",
];

/// Drop leading filler words; returns the byte offset of what remains.
fn strip_leading_filler(value: &str) -> (usize, &str) {
    let mut rest = value;
    loop {
        let Some((word, tail)) = rest.split_once(|c: char| c == ' ' || c == '\t') else {
            break;
        };
        if !LEADING_FILLER.contains(&word) {
            break;
        }
        rest = tail.trim_start();
    }
    (value.len() - rest.len(), rest)
}

/// Regex-table recognizer, no model files required.
#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    patterns: Vec<RecognitionPattern>,
}

impl PatternRecognizer {
    pub fn new() -> Self {
        Self::with_patterns(request_patterns())
    }

    pub fn with_patterns(patterns: Vec<RecognitionPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[RecognitionPattern] {
        &self.patterns
    }
}

impl Default for PatternRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();

        for pattern in &self.patterns {
            for caps in pattern.regex.captures_iter(text) {
                let Some(m) = caps.get(pattern.group) else {
                    continue;
                };
                let (skipped, value) = strip_leading_filler(m.as_str());
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                let start = m.start() + skipped;
                tracing::debug!(
                    pattern = %pattern.name,
                    value = %value,
                    start,
                    "recognized entity"
                );
                spans.push(EntitySpan::new(
                    pattern.label.clone(),
                    value,
                    start,
                    start + value.len(),
                ));
            }
        }

        spans.sort_by_key(|s| (s.start, s.end));
        spans
    }
}
