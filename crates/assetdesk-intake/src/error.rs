//! Error types for the resolution pipeline.
//!
//! None of these are shown to the requester; they are operator-facing.

/// Failure reading or writing the persisted inventory.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("inventory store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("inventory store is malformed: {0}")]
    Malformed(String),
}

/// Failure deriving the next identifiers from the persisted inventory.
///
/// A malformed last value means the persisted state is corrupt; continuing
/// would hand out duplicate or wrong identifiers.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("could not read inventory snapshot: {0}")]
    Snapshot(#[from] StoreError),
    #[error("last asset tag {value:?} is not a bracketed number like [0001]")]
    MalformedAssetTag { value: String },
    #[error("last purchase order {value:?} is not of the form PO<number>")]
    MalformedPurchaseOrder { value: String },
}

/// Failure while processing a request end to end.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("identifier allocation failed: {0}")]
    Allocation(#[from] AllocationError),
    #[error("could not append inventory record: {0}")]
    Append(#[source] StoreError),
}
