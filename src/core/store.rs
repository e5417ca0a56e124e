use thiserror::Error;

use crate::{
    qso::{ContactPatch, ContactRecord},
    types::RecordIndex,
};

/// Positional access outside the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `index` is not below the current length.
    #[error("no contact at position {index} (log holds {len})")]
    IndexOutOfRange {
        /// Requested position.
        index: RecordIndex,
        /// Log length at the time.
        len: usize,
    },
}

/// Ordered in-memory contact log.
///
/// A record is identified only by its position: edits replace in place,
/// deletes shift every later record down by one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogStore {
    records: Vec<ContactRecord>,
}

impl LogStore {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log holding `records` in the given order.
    pub fn from_records(records: Vec<ContactRecord>) -> Self {
        Self { records }
    }

    /// Appends and returns the new record's position.
    pub fn append(&mut self, rec: ContactRecord) -> RecordIndex {
        self.records.push(rec);
        self.records.len() - 1
    }

    /// Applies `patch` to the record at `index`.
    pub fn edit(&mut self, index: RecordIndex, patch: &ContactPatch) -> Result<&ContactRecord, StoreError> {
        let rec = self.get_mut(index)?;
        patch.apply_to(rec);
        Ok(&*rec)
    }

    /// Removes and returns the record at `index`.
    pub fn delete(&mut self, index: RecordIndex) -> Result<ContactRecord, StoreError> {
        self.check(index)?;
        Ok(self.records.remove(index))
    }

    /// Record at `index`, if any.
    pub fn get(&self, index: RecordIndex) -> Option<&ContactRecord> {
        self.records.get(index)
    }

    /// All records in log order.
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the log holds nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn get_mut(&mut self, index: RecordIndex) -> Result<&mut ContactRecord, StoreError> {
        self.check(index)?;
        Ok(&mut self.records[index])
    }

    fn check(&self, index: RecordIndex) -> Result<(), StoreError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}
