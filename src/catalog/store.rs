use std::path::Path;

use super::loader::{self, CatalogError};
use super::record::MovieRecord;

/// Immutable, fully loaded catalog. Built once at startup and shared
/// behind an `Arc` for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Vec<MovieRecord>,
}

impl CatalogStore {
    pub fn load(path: &str) -> Result<CatalogStore, CatalogError> {
        let records = loader::load_records(Path::new(path))?;
        Ok(CatalogStore { records })
    }

    pub fn from_records(records: Vec<MovieRecord>) -> CatalogStore {
        CatalogStore { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose title equals `title_lower` case-insensitively.
    /// The query must already be lowercased; stored titles are lowercased
    /// here at comparison time.
    pub fn find_by_title(&self, title_lower: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.title.to_lowercase() == title_lower)
    }

    /// All titles in catalog order, duplicates included.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }
}
