//! Operation and format codes
//!
//! Opaque integers handed to the transport. The values are part of the
//! gateway contract.

/// Operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OperationCode {
    None = 0,
    Login = 1,
    Read = 2,
    Update = 3,
    New = 4,
    Delete = 5,
    Conversion = 6,
    Format = 7,
    Logout = 8,
    Version = 9,
    Select = 10,
    Subroutine = 11,
    Execute = 12,
    Dictionaries = 13,
    LkSchemas = 14,
    LkProperties = 15,
    GetTable = 16,
    ResetCommonBlocks = 17,
    CommandXml = 150,
    CommandJson = 151,
}

impl OperationCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Plain data formats (DATAFORMAT_TYPE)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DataFormat {
    #[default]
    Mv = 1,
    Xml = 2,
    Json = 3,
}

/// Formats for CRUD results, optionally carrying dictionaries or schema
/// (DATAFORMATCRU_TYPE)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DataFormatCru {
    #[default]
    Mv = 1,
    Xml = 2,
    Json = 3,
    XmlDict = 5,
    XmlSch = 6,
    JsonDict = 7,
    JsonSch = 8,
}

/// Formats for schema and table results (DATAFORMATSCH_TYPE)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DataFormatSch {
    #[default]
    Mv = 1,
    Xml = 2,
    Json = 3,
    Table = 4,
}

impl From<DataFormat> for u8 {
    fn from(format: DataFormat) -> u8 {
        format as u8
    }
}

impl From<DataFormatCru> for u8 {
    fn from(format: DataFormatCru) -> u8 {
        format as u8
    }
}

impl From<DataFormatSch> for u8 {
    fn from(format: DataFormatSch) -> u8 {
        format as u8
    }
}

impl From<DataFormat> for DataFormatCru {
    fn from(format: DataFormat) -> Self {
        match format {
            DataFormat::Mv => DataFormatCru::Mv,
            DataFormat::Xml => DataFormatCru::Xml,
            DataFormat::Json => DataFormatCru::Json,
        }
    }
}
