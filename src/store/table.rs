//! RecordStore implementation
//!
//! Vec-backed table with linear lookups.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::sequence::Record;
use super::loader::parse_record;

/// Ordered, read-mostly collection of records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records in insertion (file) order
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a new empty RecordStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a record table file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut store = Self::new();
        let loaded = store.load(BufReader::new(file))?;

        tracing::debug!("Loaded {} records from {}", loaded, path.display());
        Ok(store)
    }

    /// Append every record line from `source`, in order
    ///
    /// Returns the number of records appended. The first malformed line
    /// aborts the load; records before it remain in the store.
    pub fn load<R: BufRead>(&mut self, source: R) -> Result<usize> {
        let start = self.records.len();

        for (index, line) in source.lines().enumerate() {
            let line = line?;
            self.records.push(parse_record(&line, index + 1)?);
        }

        Ok(self.records.len() - start)
    }

    /// Append a single record
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// First record named exactly `name`
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Encoded formula of the first record named exactly `name`
    pub fn find_formula(&self, name: &str) -> Option<&str> {
        self.find(name).map(|record| record.formula.as_str())
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
