//! Record id generation and recovery
//!
//! Both types always emit every slot so the surrounding options keep their
//! fixed positions whichever variant is active.

use std::fmt::{self, Write};

use crate::protocol::marks::{flag, AM, VM};

/// How the server assigns ids to new records
///
/// ```text
/// linkar: flag VM prefix VM separator VM formatSpec
/// random: flag VM numeric VM length
/// custom: flag
/// RecordIdType := linkar AM random AM custom
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordIdType {
    /// Ids are supplied by the caller
    #[default]
    None,

    /// Sequential ids generated by Linkar
    Linkar {
        prefix: String,
        separator: String,
        format_spec: String,
    },

    /// Random ids
    Random { numeric: bool, length: u32 },

    /// Ids produced by the server-side custom subroutine
    Custom,
}

impl RecordIdType {
    pub fn linkar(
        prefix: impl Into<String>,
        separator: impl Into<String>,
        format_spec: impl Into<String>,
    ) -> Self {
        RecordIdType::Linkar {
            prefix: prefix.into(),
            separator: separator.into(),
            format_spec: format_spec.into(),
        }
    }

    pub fn random(numeric: bool, length: u32) -> Self {
        RecordIdType::Random { numeric, length }
    }
}

impl fmt::Display for RecordIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIdType::Linkar {
                prefix,
                separator,
                format_spec,
            } => write!(f, "1{VM}{prefix}{VM}{separator}{VM}{format_spec}")?,
            _ => write!(f, "0{VM}{VM}{VM}")?,
        }
        f.write_char(AM)?;
        match self {
            RecordIdType::Random { numeric, length } => {
                write!(f, "1{VM}{}{VM}{length}", flag(*numeric))?
            }
            _ => write!(f, "0{VM}{VM}")?,
        }
        f.write_char(AM)?;
        f.write_str(flag(matches!(self, RecordIdType::Custom)))
    }
}

/// How deleted record ids are handed back for reuse
///
/// ```text
/// flag VM prefix VM separator AM customFlag
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecoverIdType {
    #[default]
    None,

    /// Recover ids generated by [`RecordIdType::Linkar`]
    Linkar { prefix: String, separator: String },

    /// Recovery handled by the server-side custom subroutine
    Custom,
}

impl RecoverIdType {
    pub fn linkar(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        RecoverIdType::Linkar {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }
}

impl fmt::Display for RecoverIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoverIdType::Linkar { prefix, separator } => {
                write!(f, "1{VM}{prefix}{VM}{separator}")?
            }
            _ => write!(f, "0{VM}{VM}")?,
        }
        write!(f, "{AM}{}", flag(matches!(self, RecoverIdType::Custom)))
    }
}
