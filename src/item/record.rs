//! Single record
//!
//! Positional accessors delegate to the MV operations; name-based
//! accessors resolve through the shared dictionaries.

use std::sync::Arc;

use super::{position_of, Dictionaries};
use crate::error::{LinkarError, Result};
use crate::mv::{lk_extract, lk_replace};

/// Where a dictionary name points
enum Target {
    RecordId,
    Field(usize),
    Calculated(usize),
}

/// One database record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LkItem {
    record_id: String,

    /// AM / VM / SM encoded content
    pub record: String,

    /// Snapshot sent back for optimistic locking
    pub original_record: String,

    /// AM-delimited calculated field values
    pub calculated: String,

    dictionaries: Arc<Dictionaries>,
}

impl LkItem {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            ..Self::default()
        }
    }

    pub fn with_record(record_id: impl Into<String>, record: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            record: record.into(),
            ..Self::default()
        }
    }

    pub fn from_parts(
        record_id: impl Into<String>,
        record: impl Into<String>,
        original_record: impl Into<String>,
        calculated: impl Into<String>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            record: record.into(),
            original_record: original_record.into(),
            calculated: calculated.into(),
            dictionaries: Arc::default(),
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Owning collections check uniqueness before calling this
    pub(crate) fn set_record_id(&mut self, record_id: impl Into<String>) {
        self.record_id = record_id.into();
    }

    pub fn dictionaries(&self) -> &Arc<Dictionaries> {
        &self.dictionaries
    }

    /// Point this item at a shared set of dictionaries
    pub(crate) fn set_dictionaries(&mut self, dictionaries: Arc<Dictionaries>) {
        self.dictionaries = dictionaries;
    }

    // -------------------------------------------------------------------------
    // Positional access
    // -------------------------------------------------------------------------

    pub fn field(&self, field: usize) -> &str {
        lk_extract(&self.record, field, 0, 0)
    }

    pub fn value(&self, field: usize, value: usize) -> &str {
        lk_extract(&self.record, field, value, 0)
    }

    pub fn subvalue(&self, field: usize, value: usize, subvalue: usize) -> &str {
        lk_extract(&self.record, field, value, subvalue)
    }

    pub fn set_field(&mut self, field: usize, new_val: &str) {
        self.record = lk_replace(&self.record, new_val, field, 0, 0);
    }

    pub fn set_value(&mut self, field: usize, value: usize, new_val: &str) {
        self.record = lk_replace(&self.record, new_val, field, value, 0);
    }

    pub fn set_subvalue(&mut self, field: usize, value: usize, subvalue: usize, new_val: &str) {
        self.record = lk_replace(&self.record, new_val, field, value, subvalue);
    }

    pub fn calculated_field(&self, index: usize) -> &str {
        lk_extract(&self.calculated, index, 0, 0)
    }

    // -------------------------------------------------------------------------
    // Name access
    // -------------------------------------------------------------------------

    pub(crate) fn is_record_id_name(&self, name: &str) -> bool {
        position_of(&self.dictionaries.ids, name).is_some()
    }

    fn resolve(&self, name: &str) -> Result<Target> {
        let dicts = &self.dictionaries;
        if dicts.is_empty() {
            return Err(LinkarError::DictionariesEmpty);
        }
        if position_of(&dicts.ids, name).is_some() {
            return Ok(Target::RecordId);
        }
        if let Some(pos) = position_of(&dicts.fields, name) {
            return Ok(Target::Field(pos));
        }
        if let Some(pos) = position_of(&dicts.calculated, name) {
            return Ok(Target::Calculated(pos));
        }
        Err(LinkarError::DictionaryNotFound(name.to_owned()))
    }

    /// Read by dictionary name (case-insensitive)
    ///
    /// Fails when the item has no dictionaries or the name is unknown.
    pub fn get_by_name(&self, name: &str, value: usize, subvalue: usize) -> Result<&str> {
        Ok(match self.resolve(name)? {
            Target::RecordId => self.record_id.as_str(),
            Target::Field(pos) => lk_extract(&self.record, pos, value, subvalue),
            Target::Calculated(pos) => lk_extract(&self.calculated, pos, value, subvalue),
        })
    }

    /// Write by dictionary name (case-insensitive)
    ///
    /// RecordId dictionaries are read-only here; rename through
    /// [`LkItems::set_by_name`](super::LkItems::set_by_name) or
    /// [`LkItems::rename`](super::LkItems::rename).
    pub fn set_by_name(
        &mut self,
        name: &str,
        value: usize,
        subvalue: usize,
        new_val: &str,
    ) -> Result<()> {
        match self.resolve(name)? {
            Target::RecordId => return Err(LinkarError::ReadOnlyDictionary(name.to_owned())),
            Target::Field(pos) => {
                self.record = lk_replace(&self.record, new_val, pos, value, subvalue)
            }
            Target::Calculated(pos) => {
                self.calculated = lk_replace(&self.calculated, new_val, pos, value, subvalue)
            }
        }
        Ok(())
    }
}
