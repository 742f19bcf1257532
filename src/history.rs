//! Session search history
//!
//! An ordered, in-memory list of successful searches. Entries are appended in
//! the order the results arrive, duplicates included, and only leave through
//! an explicit delete or clear. Nothing is written to disk.

use crate::data::SearchRecord;

/// Ordered list of past searches for the current session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<SearchRecord>,
}

impl History {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the end of the list
    pub fn append(&mut self, record: SearchRecord) {
        self.records.push(record);
    }

    /// Removes the record at `index`, shifting later records left.
    ///
    /// Returns the removed record, or `None` without touching the list if
    /// `index` is out of bounds.
    pub fn delete_at(&mut self, index: usize) -> Option<SearchRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Removes every record, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }

    /// Returns the record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&SearchRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[SearchRecord] {
        &self.records
    }
}
