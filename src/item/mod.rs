//! LkItem Module
//!
//! In-memory records with positional and dictionary-name access.
//!
//! ## Ownership
//! ```text
//!  LkItems ──owns──▶ Arc<Dictionaries> ◀──shares── LkItem, LkItem, ...
//! ```
//! Every item in a collection points at the collection's dictionaries;
//! the name lists are never copied per item.

mod collection;
mod data;
mod record;

pub use collection::LkItems;
pub use data::{
    LkData, LkDataConversion, LkDataCrud, LkDataExecute, LkDataFormat, LkDataSchemas,
    LkDataSubroutine,
};
pub use record::LkItem;

/// Dictionary names describing the columns of a record set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    /// Names resolving to the record id
    pub ids: Vec<String>,

    /// Names of the stored fields, in field order
    pub fields: Vec<String>,

    /// Names of the calculated fields, in order
    pub calculated: Vec<String>,
}

impl Dictionaries {
    pub fn new(ids: Vec<String>, fields: Vec<String>, calculated: Vec<String>) -> Self {
        Self {
            ids,
            fields,
            calculated,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.fields.is_empty() && self.calculated.is_empty()
    }
}

/// 1-based position of `name` in `names`, ignoring ASCII case
pub(crate) fn position_of(names: &[String], name: &str) -> Option<usize> {
    names
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .map(|index| index + 1)
}
