//! Assetdesk storage
//!
//! Concrete collaborators for the resolution engine:
//!
//! - [`TextCatalog`]: approved-device list, one `Make, Model, Processor, Ram,
//!   Storage, Operating System` line per device.
//! - [`CsvInventory`]: the inventory spreadsheet, one row per committed device.
//! - [`MemoryInventory`]: in-process table for tests.
//!
//! Both file stores treat a missing file as empty. Neither holds a lock; a
//! store must only be driven by one engine at a time.

pub mod catalog;
pub mod inventory;


pub use catalog::{parse_catalog, TextCatalog, CATALOG_SEPARATOR};
pub use inventory::{CsvInventory, MemoryInventory};
