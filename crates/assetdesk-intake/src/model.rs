//! Data model shared by the resolution pipeline and the stores.

use serde::{Deserialize, Serialize};

/// Placeholder for a missing room (and department) on a committed record.
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_DEVICE: &str = "Unknown Device";
pub const UNKNOWN_ADVISOR: &str = "Unknown Advisor";
pub const UNKNOWN_MAKE: &str = "Unknown Make";
pub const UNKNOWN_MODEL: &str = "Unknown Model";

/// Column set of the inventory spreadsheet, in storage order.
pub const INVENTORY_COLUMNS: [&str; 8] = [
    "Department",
    "Room",
    "Asset Tag",
    "Device Name",
    "Advisor",
    "Make",
    "Model",
    "Purchase Order",
];

// ============================================================================
// Catalog
// ============================================================================

/// One approved device configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Processor")]
    pub processor: String,
    #[serde(rename = "Ram")]
    pub ram: String,
    #[serde(rename = "Storage")]
    pub storage: String,
    #[serde(rename = "Operating System")]
    pub operating_system: String,
}

impl DeviceSpec {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        processor: impl Into<String>,
        ram: impl Into<String>,
        storage: impl Into<String>,
        operating_system: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            processor: processor.into(),
            ram: ram.into(),
            storage: storage.into(),
            operating_system: operating_system.into(),
        }
    }
}

/// Ordered list of approved devices.
///
/// Order is significant: suggestion ties resolve to the earliest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<DeviceSpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, spec: DeviceSpec) {
        self.entries.push(spec);
    }

    pub fn entries(&self) -> &[DeviceSpec] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviceSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<DeviceSpec>> for Catalog {
    fn from(entries: Vec<DeviceSpec>) -> Self {
        Self { entries }
    }
}

impl FromIterator<DeviceSpec> for Catalog {
    fn from_iter<I: IntoIterator<Item = DeviceSpec>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DeviceSpec;
    type IntoIter = std::slice::Iter<'a, DeviceSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Extracted request
// ============================================================================

/// A request as understood from free text.
///
/// Every attribute is optional: absence means "not mentioned", never an error.
/// `device_valid` and `suggestion` are derived by validation
/// (see [`crate::validation::check_device`]) and stay at their defaults until then.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRequest {
    pub department: Option<String>,
    pub room: Option<String>,
    pub advisor: Option<String>,
    pub device_name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub operating_system: Option<String>,
    pub device_valid: bool,
    pub suggestion: Option<String>,
}

impl ExtractedRequest {
    /// True when both halves of the device identity were found.
    pub fn names_device(&self) -> bool {
        self.make.is_some() && self.model.is_some()
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// A committed inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Asset Tag")]
    pub asset_tag: String,
    #[serde(rename = "Device Name")]
    pub device_name: String,
    #[serde(rename = "Advisor")]
    pub advisor: String,
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Purchase Order")]
    pub purchase_order: String,
}

/// The persisted inventory at one point in time, in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventorySnapshot {
    records: Vec<InventoryRecord>,
}

impl InventorySnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Column headers of the persisted table (fixed even when empty).
    pub fn columns(&self) -> &'static [&'static str] {
        &INVENTORY_COLUMNS
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    /// Most recently appended record.
    pub fn last(&self) -> Option<&InventoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<InventoryRecord>> for InventorySnapshot {
    fn from(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }
}
