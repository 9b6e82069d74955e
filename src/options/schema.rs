//! Options for LkSchemas, LkProperties and GetTable
//!
//! Layouts branch on the schema mode. Some slots are pinned to constants in
//! SQLMODE and DICTIONARIES mode; the server reads them positionally, so the
//! constants are emitted whatever the caller asked for.

use std::fmt;

use super::common::{Pagination, PaginationSlot};
use crate::protocol::marks::{flag, AM};

/// Schema source codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SchemaType {
    LkSchemas = 1,
    SqlMode = 2,
    Dictionaries = 3,
    None = 4,
}

/// Column header style codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum RowHeaders {
    #[default]
    MainLabel = 1,
    ShortLabel = 2,
    None = 3,
}

/// Schema mode and the arguments each mode accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Linkar schemas
    LkSchemas {
        row_headers: RowHeaders,
        row_properties: bool,
        only_visibles: bool,
        use_property_names: bool,
    },

    /// SQL mode: headers off, row properties and property names on
    SqlMode { only_visibles: bool },

    /// Raw file dictionaries: row properties on, visibility filter off
    Dictionaries { row_headers: RowHeaders },
}

impl Default for SchemaMode {
    fn default() -> Self {
        SchemaMode::LkSchemas {
            row_headers: RowHeaders::MainLabel,
            row_properties: false,
            only_visibles: false,
            use_property_names: false,
        }
    }
}

/// Slot values after the per-mode constants have been applied
struct EffectiveSlots {
    schema_type: SchemaType,
    row_headers: RowHeaders,
    row_properties: bool,
    only_visibles: bool,
    use_property_names: bool,
}

impl SchemaMode {
    fn effective(&self) -> EffectiveSlots {
        match *self {
            SchemaMode::LkSchemas {
                row_headers,
                row_properties,
                only_visibles,
                use_property_names,
            } => EffectiveSlots {
                schema_type: SchemaType::LkSchemas,
                row_headers,
                row_properties,
                only_visibles,
                use_property_names,
            },
            SchemaMode::SqlMode { only_visibles } => EffectiveSlots {
                schema_type: SchemaType::SqlMode,
                row_headers: RowHeaders::None,
                row_properties: true,
                only_visibles,
                use_property_names: true,
            },
            SchemaMode::Dictionaries { row_headers } => EffectiveSlots {
                schema_type: SchemaType::Dictionaries,
                row_headers,
                row_properties: true,
                only_visibles: false,
                use_property_names: false,
            },
        }
    }
}

// =============================================================================
// LkSchemas
// =============================================================================

/// `type AM rowHeaders AM rowProperties AM onlyVisibles AM pagination`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LkSchemasOptions {
    mode: SchemaMode,
    pagination: Option<Pagination>,
}

impl LkSchemasOptions {
    pub fn lk_schemas(row_headers: RowHeaders, row_properties: bool, only_visibles: bool) -> Self {
        Self {
            mode: SchemaMode::LkSchemas {
                row_headers,
                row_properties,
                only_visibles,
                use_property_names: false,
            },
            pagination: None,
        }
    }

    pub fn sql_mode(only_visibles: bool) -> Self {
        Self {
            mode: SchemaMode::SqlMode { only_visibles },
            pagination: None,
        }
    }

    pub fn dictionaries(row_headers: RowHeaders) -> Self {
        Self {
            mode: SchemaMode::Dictionaries { row_headers },
            pagination: None,
        }
    }

    pub fn pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn mode(&self) -> SchemaMode {
        self.mode
    }
}

impl fmt::Display for LkSchemasOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.mode.effective();
        write!(
            f,
            "{}{AM}{}{AM}{}{AM}{}{AM}{}",
            slots.schema_type as u8,
            slots.row_headers as u8,
            flag(slots.row_properties),
            flag(slots.only_visibles),
            PaginationSlot(self.pagination)
        )
    }
}

// =============================================================================
// LkProperties
// =============================================================================

/// `type AM rowHeaders AM rowProperties AM onlyVisibles AM usePropertyNames AM pagination`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LkPropertiesOptions {
    mode: SchemaMode,
    pagination: Option<Pagination>,
}

impl LkPropertiesOptions {
    pub fn lk_schemas(
        row_headers: RowHeaders,
        row_properties: bool,
        only_visibles: bool,
        use_property_names: bool,
    ) -> Self {
        Self {
            mode: SchemaMode::LkSchemas {
                row_headers,
                row_properties,
                only_visibles,
                use_property_names,
            },
            pagination: None,
        }
    }

    pub fn sql_mode(only_visibles: bool) -> Self {
        Self {
            mode: SchemaMode::SqlMode { only_visibles },
            pagination: None,
        }
    }

    pub fn dictionaries(row_headers: RowHeaders) -> Self {
        Self {
            mode: SchemaMode::Dictionaries { row_headers },
            pagination: None,
        }
    }

    pub fn pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn mode(&self) -> SchemaMode {
        self.mode
    }
}

impl fmt::Display for LkPropertiesOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.mode.effective();
        write!(
            f,
            "{}{AM}{}{AM}{}{AM}{}{AM}{}{AM}{}",
            slots.schema_type as u8,
            slots.row_headers as u8,
            flag(slots.row_properties),
            flag(slots.only_visibles),
            flag(slots.use_property_names),
            PaginationSlot(self.pagination)
        )
    }
}

// =============================================================================
// GetTable
// =============================================================================

/// Table source: a schema mode, or plain records with no schema at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableMode {
    Schema(SchemaMode),
    None { row_headers: RowHeaders },
}

/// Options for GetTable
///
/// ```text
/// schema modes: type AM rowHeaders AM rowProperties AM onlyVisibles AM usePropertyNames
///               AM repeatValues AM applyConversion AM applyFormat AM calculated AM pagination
/// NONE:         4 AM rowHeaders AM repeatValues AM pagination
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    mode: TableMode,
    repeat_values: bool,
    apply_conversion: bool,
    apply_format: bool,
    calculated: bool,
    pagination: Option<Pagination>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::from_mode(TableMode::Schema(SchemaMode::default()))
    }
}

impl TableOptions {
    fn from_mode(mode: TableMode) -> Self {
        Self {
            mode,
            repeat_values: false,
            apply_conversion: false,
            apply_format: false,
            calculated: false,
            pagination: None,
        }
    }

    pub fn lk_schemas(
        row_headers: RowHeaders,
        row_properties: bool,
        only_visibles: bool,
        use_property_names: bool,
    ) -> Self {
        Self::from_mode(TableMode::Schema(SchemaMode::LkSchemas {
            row_headers,
            row_properties,
            only_visibles,
            use_property_names,
        }))
    }

    pub fn sql_mode(only_visibles: bool) -> Self {
        Self::from_mode(TableMode::Schema(SchemaMode::SqlMode { only_visibles }))
    }

    pub fn dictionaries(row_headers: RowHeaders) -> Self {
        Self::from_mode(TableMode::Schema(SchemaMode::Dictionaries { row_headers }))
    }

    /// Plain records, no schema
    pub fn no_schema(row_headers: RowHeaders) -> Self {
        Self::from_mode(TableMode::None { row_headers })
    }

    /// Repeat single values on every multivalue row
    pub fn repeat_values(mut self, on: bool) -> Self {
        self.repeat_values = on;
        self
    }

    pub fn apply_conversion(mut self, on: bool) -> Self {
        self.apply_conversion = on;
        self
    }

    pub fn apply_format(mut self, on: bool) -> Self {
        self.apply_format = on;
        self
    }

    pub fn calculated(mut self, on: bool) -> Self {
        self.calculated = on;
        self
    }

    pub fn pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn schema_type(&self) -> SchemaType {
        match self.mode {
            TableMode::Schema(mode) => mode.effective().schema_type,
            TableMode::None { .. } => SchemaType::None,
        }
    }
}

impl fmt::Display for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            TableMode::Schema(mode) => {
                let slots = mode.effective();
                write!(
                    f,
                    "{}{AM}{}{AM}{}{AM}{}{AM}{}{AM}{}{AM}{}{AM}{}{AM}{}{AM}{}",
                    slots.schema_type as u8,
                    slots.row_headers as u8,
                    flag(slots.row_properties),
                    flag(slots.only_visibles),
                    flag(slots.use_property_names),
                    flag(self.repeat_values),
                    flag(self.apply_conversion),
                    flag(self.apply_format),
                    flag(self.calculated),
                    PaginationSlot(self.pagination)
                )
            }
            TableMode::None { row_headers } => write!(
                f,
                "{}{AM}{}{AM}{}{AM}{}",
                SchemaType::None as u8,
                row_headers as u8,
                flag(self.repeat_values),
                PaginationSlot(self.pagination)
            ),
        }
    }
}
