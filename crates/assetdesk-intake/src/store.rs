//! Collaborator contracts for the persisted catalog and inventory.
//!
//! Concrete file-backed implementations live in `assetdesk-storage`.

use crate::error::StoreError;
use crate::model::{Catalog, InventoryRecord, InventorySnapshot};

/// Source of approved device configurations.
///
/// Loading never fails: a missing source is an empty catalog and malformed
/// entries are skipped.
pub trait CatalogSource {
    fn load_catalog(&self) -> Catalog;
}

/// Append-only inventory table.
///
/// `append` takes `&mut self`: allocation reads the snapshot and the commit
/// appends to it, so only one resolution may run against a store at a time.
pub trait InventoryStore {
    /// Read the full table as currently persisted. A missing table is empty.
    fn load_snapshot(&self) -> Result<InventorySnapshot, StoreError>;

    fn append(&mut self, record: &InventoryRecord) -> Result<(), StoreError>;
}

impl CatalogSource for Catalog {
    fn load_catalog(&self) -> Catalog {
        self.clone()
    }
}

impl<C: CatalogSource + ?Sized> CatalogSource for &C {
    fn load_catalog(&self) -> Catalog {
        (**self).load_catalog()
    }
}

impl<S: InventoryStore + ?Sized> InventoryStore for &mut S {
    fn load_snapshot(&self) -> Result<InventorySnapshot, StoreError> {
        (**self).load_snapshot()
    }

    fn append(&mut self, record: &InventoryRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }
}
