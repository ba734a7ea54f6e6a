//! Asset tag and purchase order allocation.
//!
//! There is no in-process counter. Every allocation re-reads the persisted
//! inventory and continues from its last row, so restarts and out-of-band
//! edits to the store are picked up automatically.

use crate::error::AllocationError;
use crate::model::InventorySnapshot;
use crate::store::InventoryStore;
use serde::{Deserialize, Serialize};

/// Value treated as the last asset tag when the inventory is empty.
pub const ASSET_TAG_SEED: u64 = 1;
/// Value treated as the last purchase order number when the inventory is empty.
pub const PURCHASE_ORDER_SEED: u64 = 1000;
pub const PURCHASE_ORDER_PREFIX: &str = "PO";

/// Identifiers for one new inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub asset_tag: String,
    pub purchase_order: String,
}

/// Produces fresh identifiers for a commit.
pub trait IdentifierAllocator {
    fn allocate(&self) -> Result<Identifiers, AllocationError>;
}

pub fn format_asset_tag(n: u64) -> String {
    format!("[{:04}]", n)
}

pub fn format_purchase_order(n: u64) -> String {
    format!("{}{:04}", PURCHASE_ORDER_PREFIX, n)
}

/// Digits only; `u64::from_str` alone would also take a sign.
fn parse_number(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Accepts `[0002]` as written by this crate, and a bare `2`.
fn parse_asset_tag(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    parse_number(inner.trim())
}

fn parse_purchase_order(value: &str) -> Option<u64> {
    parse_number(value.trim().strip_prefix(PURCHASE_ORDER_PREFIX)?.trim())
}

/// Next asset tag after the snapshot's last row.
pub fn next_asset_tag(snapshot: &InventorySnapshot) -> Result<String, AllocationError> {
    let last = match snapshot.last() {
        Some(record) => parse_asset_tag(&record.asset_tag).ok_or_else(|| {
            AllocationError::MalformedAssetTag {
                value: record.asset_tag.clone(),
            }
        })?,
        None => ASSET_TAG_SEED,
    };
    let next = last
        .checked_add(1)
        .ok_or_else(|| AllocationError::MalformedAssetTag {
            value: format_asset_tag(last),
        })?;
    Ok(format_asset_tag(next))
}

/// Next purchase order after the snapshot's last row.
pub fn next_purchase_order(snapshot: &InventorySnapshot) -> Result<String, AllocationError> {
    let last = match snapshot.last() {
        Some(record) => parse_purchase_order(&record.purchase_order).ok_or_else(|| {
            AllocationError::MalformedPurchaseOrder {
                value: record.purchase_order.clone(),
            }
        })?,
        None => PURCHASE_ORDER_SEED,
    };
    let next = last
        .checked_add(1)
        .ok_or_else(|| AllocationError::MalformedPurchaseOrder {
            value: format_purchase_order(last),
        })?;
    Ok(format_purchase_order(next))
}

/// Both identifiers from one snapshot.
pub fn allocate_from(snapshot: &InventorySnapshot) -> Result<Identifiers, AllocationError> {
    Ok(Identifiers {
        asset_tag: next_asset_tag(snapshot)?,
        purchase_order: next_purchase_order(snapshot)?,
    })
}

/// Allocator that reads the store on every call.
#[derive(Debug)]
pub struct SnapshotAllocator<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: InventoryStore + ?Sized> SnapshotAllocator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: InventoryStore + ?Sized> IdentifierAllocator for SnapshotAllocator<'_, S> {
    fn allocate(&self) -> Result<Identifiers, AllocationError> {
        let snapshot = self.store.load_snapshot()?;
        let ids = allocate_from(&snapshot)?;
        tracing::debug!(
            rows = snapshot.len(),
            asset_tag = %ids.asset_tag,
            purchase_order = %ids.purchase_order,
            "allocated identifiers"
        );
        Ok(ids)
    }
}
