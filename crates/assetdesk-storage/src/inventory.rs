//! Inventory spreadsheet stores.

use assetdesk_intake::{
    InventoryRecord, InventorySnapshot, InventoryStore, StoreError, INVENTORY_COLUMNS,
};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

fn csv_error(err: csv::Error) -> StoreError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => StoreError::Io(io),
        _ => StoreError::Malformed(message),
    }
}

/// Whether a non-empty file's last byte is a line terminator.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Inventory kept as a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvInventory {
    path: PathBuf,
}

impl CsvInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for CsvInventory {
    fn load_snapshot(&self) -> Result<InventorySnapshot, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "inventory not found; starting empty");
                return Ok(InventorySnapshot::empty());
            }
            Err(err) => return Err(err.into()),
        };

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize::<InventoryRecord>() {
            records.push(row.map_err(csv_error)?);
        }

        Ok(InventorySnapshot::from(records))
    }

    fn append(&mut self, record: &InventoryRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;
        // Hand-edited sheets often lack a final newline.
        if !needs_header && !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer.write_record(INVENTORY_COLUMNS).map_err(csv_error)?;
        }
        writer.serialize(record).map_err(csv_error)?;
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            asset_tag = %record.asset_tag,
            "appended inventory row"
        );
        Ok(())
    }
}

/// Inventory held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    records: Vec<InventoryRecord>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }
}

impl InventoryStore for MemoryInventory {
    fn load_snapshot(&self) -> Result<InventorySnapshot, StoreError> {
        Ok(InventorySnapshot::from(self.records.clone()))
    }

    fn append(&mut self, record: &InventoryRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }
}
