//! Request resolution for equipment intake
//!
//! Turns a free-text equipment request (typically an email body) into either
//! a committed inventory row or a message back to the requester:
//!
//! ```text
//! text ─► Extractor ─► validate ─┬─ valid + named ─► allocate ids ─► Commit(record)
//!   (NER + lexicon)              └─ otherwise ─► suggest ─► Clarification / Acknowledged
//! ```
//!
//! - Entity recognition is injected through [`EntityRecognizer`];
//!   [`PatternRecognizer`] is the built-in rule table.
//! - Identifiers are derived from the persisted inventory on every call,
//!   never from an in-memory counter.
//! - The catalog and inventory are collaborators ([`CatalogSource`],
//!   [`InventoryStore`]); file-backed versions live in `assetdesk-storage`.

pub mod allocation;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod lexicon;
pub mod model;
pub mod recognizer;
pub mod response;
pub mod store;
pub mod validation;

pub use allocation::{
    allocate_from, next_asset_tag, next_purchase_order, IdentifierAllocator, Identifiers,
    SnapshotAllocator, ASSET_TAG_SEED, PURCHASE_ORDER_SEED,
};
pub use engine::{RequestEngine, Resolution};
pub use error::{AllocationError, EngineError, StoreError};
pub use extraction::Extractor;
pub use lexicon::{Lexicon, LexiconClass, LexiconHit, LexiconMatcher};
pub use model::*;
pub use recognizer::{EntityLabel, EntityRecognizer, EntitySpan, PatternRecognizer};
pub use response::{
    clarification_message, missing_fields, resolve, Outcome, RequiredField, ACKNOWLEDGMENT,
};
pub use store::{CatalogSource, InventoryStore};
pub use validation::{best_match, check_device, similarity, suggest, validate, NO_SIMILAR_DEVICE};
