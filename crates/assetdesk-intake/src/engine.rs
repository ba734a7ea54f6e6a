//! Request resolution engine: extraction → validation → outcome → commit.

use crate::allocation::{IdentifierAllocator, Identifiers, SnapshotAllocator};
use crate::error::EngineError;
use crate::extraction::Extractor;
use crate::lexicon::Lexicon;
use crate::model::ExtractedRequest;
use crate::recognizer::EntityRecognizer;
use crate::response::{resolve, Outcome};
use crate::store::{CatalogSource, InventoryStore};
use serde::{Deserialize, Serialize};

/// The extracted request together with what was done with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub request: ExtractedRequest,
    pub outcome: Outcome,
}

/// Processes one request at a time against a catalog and an inventory store.
///
/// Committing needs `&mut self`, which keeps allocate-then-append exclusive
/// for the store this engine owns. Two engines must not share one persisted
/// inventory concurrently.
pub struct RequestEngine<R, C, S> {
    extractor: Extractor<R>,
    catalog: C,
    store: S,
}

impl<R, C, S> RequestEngine<R, C, S>
where
    R: EntityRecognizer,
    C: CatalogSource,
    S: InventoryStore,
{
    pub fn new(recognizer: R, lexicon: &Lexicon, catalog: C, store: S) -> Self {
        Self {
            extractor: Extractor::new(recognizer, lexicon),
            catalog,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Extract and validate without committing anything.
    pub fn inspect(&self, text: &str) -> ExtractedRequest {
        let catalog = self.catalog.load_catalog();
        self.extractor.extract_validated(text, &catalog)
    }

    /// Resolve `text` and append the record on commit.
    pub fn resolve_request(&mut self, text: &str) -> Result<Resolution, EngineError> {
        let request = self.inspect(text);
        let outcome = resolve(&request, &SnapshotAllocator::new(&self.store))?;

        match &outcome {
            Outcome::Commit(record) => {
                self.store.append(record).map_err(EngineError::Append)?;
                tracing::info!(
                    asset_tag = %record.asset_tag,
                    purchase_order = %record.purchase_order,
                    "inventory updated"
                );
            }
            Outcome::ClarificationNeeded(_) => {
                tracing::info!("request needs clarification");
            }
            Outcome::ProcessingAcknowledged(_) => {
                tracing::info!(
                    device_valid = request.device_valid,
                    "request acknowledged without commit"
                );
            }
        }

        Ok(Resolution { request, outcome })
    }

    pub fn process_request(&mut self, text: &str) -> Result<Outcome, EngineError> {
        Ok(self.resolve_request(text)?.outcome)
    }

    /// Identifiers the next commit would receive.
    pub fn preview_identifiers(&self) -> Result<Identifiers, EngineError> {
        Ok(SnapshotAllocator::new(&self.store).allocate()?)
    }
}
