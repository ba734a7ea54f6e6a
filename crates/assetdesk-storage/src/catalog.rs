//! Approved-device catalog stored as a text file.

use assetdesk_intake::{Catalog, CatalogSource, DeviceSpec};
use std::path::{Path, PathBuf};

/// Field separator within a catalog line.
pub const CATALOG_SEPARATOR: &str = ", ";

const FIELDS_PER_LINE: usize = 6;

/// Parse catalog text, skipping blank and malformed lines.
pub fn parse_catalog(contents: &str) -> Catalog {
    let mut catalog = Catalog::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(CATALOG_SEPARATOR).collect();
        if parts.len() != FIELDS_PER_LINE {
            tracing::debug!(
                line = line_no + 1,
                fields = parts.len(),
                "skipping malformed catalog line"
            );
            continue;
        }

        catalog.push(DeviceSpec::new(
            parts[0], parts[1], parts[2], parts[3], parts[4], parts[5],
        ));
    }

    catalog
}

/// Catalog file on disk, re-read on every load.
#[derive(Debug, Clone)]
pub struct TextCatalog {
    path: PathBuf,
}

impl TextCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for TextCatalog {
    fn load_catalog(&self) -> Catalog {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let catalog = parse_catalog(&contents);
                tracing::debug!(
                    path = %self.path.display(),
                    entries = catalog.len(),
                    "loaded device catalog"
                );
                catalog
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "device catalog not found; no device will validate"
                );
                Catalog::new()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read device catalog; treating as empty"
                );
                Catalog::new()
            }
        }
    }
}
