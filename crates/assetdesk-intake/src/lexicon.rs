//! Fixed term lists for device class, make, and model.
//!
//! Matching is case-insensitive and phrase-aligned (a term must start and end
//! on a word boundary). A hit reports the lexicon's spelling of the term, so
//! "dell latitude" in an email still compares equal to the catalog's "Dell".

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which term list a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexiconClass {
    DeviceClass,
    Make,
    Model,
}

/// The three term lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub device_classes: Vec<String>,
    pub makes: Vec<String>,
    pub models: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            device_classes: vec!["laptop".into(), "desktop".into(), "tablet".into()],
            makes: vec!["Dell".into()],
            models: vec!["Latitude".into(), "Optiplex".into(), "Precision".into()],
        }
    }
}

/// One lexicon term found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconHit {
    pub class: LexiconClass,
    /// Canonical spelling from the lexicon.
    pub term: String,
    pub start: usize,
    pub end: usize,
}

/// Compiled multi-pattern matcher over a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconMatcher {
    regex: Option<Regex>,
    terms: HashMap<String, (LexiconClass, String)>,
}

impl LexiconMatcher {
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut terms: HashMap<String, (LexiconClass, String)> = HashMap::new();
        let lists = [
            (LexiconClass::DeviceClass, &lexicon.device_classes),
            (LexiconClass::Make, &lexicon.makes),
            (LexiconClass::Model, &lexicon.models),
        ];
        for (class, list) in lists {
            for term in list {
                let term = term.trim();
                if term.is_empty() {
                    continue;
                }
                // First list to claim a term keeps it.
                terms
                    .entry(term.to_lowercase())
                    .or_insert_with(|| (class, term.to_string()));
            }
        }

        // Longest first so "Precision Tower" wins over "Precision".
        let mut keys: Vec<&String> = terms.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let regex = if keys.is_empty() {
            None
        } else {
            let alternation = keys
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            match RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
                .case_insensitive(true)
                .build()
            {
                Ok(regex) => Some(regex),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        terms = keys.len(),
                        "lexicon did not compile; phrase matching disabled"
                    );
                    None
                }
            }
        };

        Self { regex, terms }
    }

    /// All non-overlapping hits, in document order.
    pub fn scan(&self, text: &str) -> Vec<LexiconHit> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        regex
            .find_iter(text)
            .filter_map(|m| {
                let (class, term) = self.terms.get(&m.as_str().to_lowercase())?;
                Some(LexiconHit {
                    class: *class,
                    term: term.clone(),
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_are_case_insensitive_and_canonical() {
        let matcher = LexiconMatcher::new(&Lexicon::default());
        let hits = matcher.scan("please get a DELL latitude LAPTOP");

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].class, LexiconClass::Make);
        assert_eq!(hits[0].term, "Dell");
        assert_eq!(hits[1].class, LexiconClass::Model);
        assert_eq!(hits[1].term, "Latitude");
        assert_eq!(hits[2].class, LexiconClass::DeviceClass);
        assert_eq!(hits[2].term, "laptop");
    }

    #[test]
    fn test_terms_must_align_with_words() {
        let matcher = LexiconMatcher::new(&Lexicon::default());
        assert!(matcher.scan("Dellwood laptops and imprecision").is_empty());
    }

    #[test]
    fn test_longer_phrase_wins() {
        let lexicon = Lexicon {
            device_classes: vec![],
            makes: vec![],
            models: vec!["Precision".into(), "Precision Tower".into()],
        };
        let hits = LexiconMatcher::new(&lexicon).scan("a precision tower please");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "Precision Tower");
    }

    #[test]
    fn test_empty_lexicon_matches_nothing() {
        let lexicon = Lexicon {
            device_classes: vec![],
            makes: vec![],
            models: vec![],
        };
        assert!(LexiconMatcher::new(&lexicon).scan("Dell laptop").is_empty());
    }
}
