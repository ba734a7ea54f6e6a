//! Free text → [`ExtractedRequest`].
//!
//! Two passes over the text:
//! 1. entity recognition fills department (organization), room (location),
//!    and advisor (person);
//! 2. lexicon matching fills device name, make, and model.
//!
//! Within each pass the last hit of a category in document order overwrites
//! earlier ones. Processor, RAM, storage, and OS are not read from free text.

use crate::lexicon::{Lexicon, LexiconClass, LexiconMatcher};
use crate::model::{Catalog, ExtractedRequest};
use crate::recognizer::{EntityLabel, EntityRecognizer};
use crate::validation::check_device;

/// Entity extractor with an injected recognizer.
#[derive(Debug, Clone)]
pub struct Extractor<R> {
    recognizer: R,
    matcher: LexiconMatcher,
}

impl<R: EntityRecognizer> Extractor<R> {
    pub fn new(recognizer: R, lexicon: &Lexicon) -> Self {
        Self {
            recognizer,
            matcher: LexiconMatcher::new(lexicon),
        }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Extract attributes from `text`. Never fails; unknown means `None`.
    pub fn extract(&self, text: &str) -> ExtractedRequest {
        let mut request = ExtractedRequest::default();

        for span in self.recognizer.recognize(text) {
            let value = span.text.trim();
            if value.is_empty() {
                continue;
            }
            let slot = match span.label {
                EntityLabel::Organization => &mut request.department,
                EntityLabel::Location => &mut request.room,
                EntityLabel::Person => &mut request.advisor,
                EntityLabel::Other(_) => continue,
            };
            *slot = Some(value.to_string());
        }

        for hit in self.matcher.scan(text) {
            let slot = match hit.class {
                LexiconClass::DeviceClass => &mut request.device_name,
                LexiconClass::Make => &mut request.make,
                LexiconClass::Model => &mut request.model,
            };
            *slot = Some(hit.term);
        }

        tracing::debug!(
            department = ?request.department,
            room = ?request.room,
            advisor = ?request.advisor,
            device = ?request.device_name,
            make = ?request.make,
            model = ?request.model,
            "extracted request"
        );

        request
    }

    /// Extract, then validate against `catalog` (and attach a suggestion when
    /// the named device is not approved).
    pub fn extract_validated(&self, text: &str, catalog: &Catalog) -> ExtractedRequest {
        let mut request = self.extract(text);
        check_device(&mut request, catalog);
        request
    }
}
