//! Record collection
//!
//! Ordered records keyed by RecordId, plus the buffer layouts used to send
//! them to the gateway.
//!
//! ## Buffers
//! ```text
//! read:   id1 RS id2 ...
//! update: ids FS records [FS originals]
//! new:    ids FS records
//! delete: ids [FS originals]
//! ```

use std::sync::Arc;

use super::record::LkItem;
use super::Dictionaries;
use crate::error::{LinkarError, Result};
use crate::protocol::marks::{FS, RS};
use crate::protocol::LkResponse;

/// Ordered set of records with unique RecordIds
#[derive(Debug, Clone, Default)]
pub struct LkItems {
    items: Vec<LkItem>,
    dictionaries: Arc<Dictionaries>,
}

impl LkItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionaries(dictionaries: Dictionaries) -> Self {
        Self {
            items: Vec::new(),
            dictionaries: Arc::new(dictionaries),
        }
    }

    /// Build the collection carried by an MV response
    ///
    /// Records, originals and calculated values are matched to ids by
    /// position; missing positions read as "".
    pub fn from_response(response: &LkResponse<'_>) -> Self {
        let dictionaries = Dictionaries::new(
            response.record_id_dicts(),
            response.record_dicts(),
            response.calculated_dicts(),
        );
        let ids = response.record_ids();
        let records = response.records();
        let originals = response.original_records();
        let calculated = response.records_calculated();

        if misaligned(
            ids.len(),
            &[records.as_slice(), originals.as_slice(), calculated.as_slice()],
        ) {
            tracing::trace!(
                "Response arrays not aligned: {} ids, {} records, {} originals, {} calculated",
                ids.len(),
                records.len(),
                originals.len(),
                calculated.len()
            );
        }

        let at = |list: &[String], index: usize| list.get(index).cloned().unwrap_or_default();

        let mut items = Self::with_dictionaries(dictionaries);
        for (index, id) in ids.iter().enumerate() {
            items.add(LkItem::from_parts(
                id.as_str(),
                at(&records, index),
                at(&originals, index),
                at(&calculated, index),
            ));
        }
        items
    }

    pub fn dictionaries(&self) -> &Arc<Dictionaries> {
        &self.dictionaries
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Add an item, sharing this collection's dictionaries with it
    ///
    /// Returns false and leaves the collection unchanged if the RecordId is
    /// already present.
    pub fn add(&mut self, mut item: LkItem) -> bool {
        if self.contains(item.record_id()) {
            tracing::debug!("Duplicate record id '{}' not added", item.record_id());
            return false;
        }
        item.set_dictionaries(Arc::clone(&self.dictionaries));
        self.items.push(item);
        true
    }

    pub fn add_id(&mut self, record_id: impl Into<String>) -> bool {
        self.add(LkItem::new(record_id))
    }

    /// Add one empty item per id; returns how many were new
    pub fn add_ids<I, S>(&mut self, record_ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        record_ids
            .into_iter()
            .map(|id| self.add_id(id))
            .filter(|added| *added)
            .count()
    }

    pub fn contains(&self, record_id: &str) -> bool {
        self.items.iter().any(|item| item.record_id() == record_id)
    }

    pub fn get(&self, record_id: &str) -> Option<&LkItem> {
        self.items.iter().find(|item| item.record_id() == record_id)
    }

    pub fn get_mut(&mut self, record_id: &str) -> Option<&mut LkItem> {
        self.items.iter_mut().find(|item| item.record_id() == record_id)
    }

    /// Change an item's RecordId
    ///
    /// Fails if `old_id` is absent or `new_id` already belongs to another
    /// item. Renaming to the same id is a no-op.
    pub fn rename(&mut self, old_id: &str, new_id: &str) -> Result<()> {
        if old_id == new_id {
            if self.contains(old_id) {
                return Ok(());
            }
            return Err(LinkarError::RecordNotFound(old_id.to_owned()));
        }
        if self.contains(new_id) {
            return Err(LinkarError::DuplicateRecordId(new_id.to_owned()));
        }
        let item = self
            .get_mut(old_id)
            .ok_or_else(|| LinkarError::RecordNotFound(old_id.to_owned()))?;
        item.set_record_id(new_id);
        Ok(())
    }

    /// Write by dictionary name on the item `record_id`
    ///
    /// RecordId dictionaries rename the item, keeping ids unique.
    pub fn set_by_name(
        &mut self,
        record_id: &str,
        name: &str,
        value: usize,
        subvalue: usize,
        new_val: &str,
    ) -> Result<()> {
        let item = self
            .get_mut(record_id)
            .ok_or_else(|| LinkarError::RecordNotFound(record_id.to_owned()))?;
        if item.dictionaries().is_empty() {
            return Err(LinkarError::DictionariesEmpty);
        }
        if item.is_record_id_name(name) {
            return self.rename(record_id, new_val);
        }
        item.set_by_name(name, value, subvalue, new_val)
    }

    pub fn remove(&mut self, record_id: &str) -> Option<LkItem> {
        let index = self.items.iter().position(|item| item.record_id() == record_id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LkItem> {
        self.items.iter()
    }

    // -------------------------------------------------------------------------
    // Buffers
    // -------------------------------------------------------------------------

    fn join(&self, part: impl Fn(&LkItem) -> &str) -> String {
        let mut out = String::new();
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                out.push(RS);
            }
            out.push_str(part(item));
        }
        out
    }

    fn ids(&self) -> String {
        self.join(|item| item.record_id())
    }

    pub fn compose_read_buffer(&self) -> String {
        self.ids()
    }

    pub fn compose_update_buffer(&self, include_originals: bool) -> String {
        let mut buffer = self.compose_new_buffer();
        if include_originals {
            buffer.push(FS);
            buffer.push_str(&self.join(|item| item.original_record.as_str()));
        }
        buffer
    }

    pub fn compose_new_buffer(&self) -> String {
        format!("{}{FS}{}", self.ids(), self.join(|item| item.record.as_str()))
    }

    pub fn compose_delete_buffer(&self, include_originals: bool) -> String {
        let mut buffer = self.ids();
        if include_originals {
            buffer.push(FS);
            buffer.push_str(&self.join(|item| item.original_record.as_str()));
        }
        buffer
    }
}

/// True when any non-empty list has a different length than the id list
fn misaligned(ids: usize, lists: &[&[String]]) -> bool {
    lists
        .iter()
        .any(|list| !list.is_empty() && list.len() != ids)
}

impl<'a> IntoIterator for &'a LkItems {
    type Item = &'a LkItem;
    type IntoIter = std::slice::Iter<'a, LkItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
