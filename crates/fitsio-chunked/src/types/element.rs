//! Element type codes and their fixed byte widths.

use std::fmt;

use serde::Serialize;

use super::error::{ChunkError, ChunkResult};

/// Element types a handle may report, keyed by their container type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Signed 16-bit integer (code 16).
    Short,
    /// Unsigned 16-bit integer (code 20).
    UShort,
    /// Signed 32-bit integer (code 32).
    Long,
    /// Single-precision float (code -32).
    Float,
    /// Double-precision float (code -64).
    Double,
}

impl ElementType {
    /// Every supported type, in table order.
    pub const ALL: [ElementType; 5] = [
        ElementType::Long,
        ElementType::Float,
        ElementType::Double,
        ElementType::Short,
        ElementType::UShort,
    ];

    /// Look up a type code.
    pub fn from_code(code: i32) -> ChunkResult<Self> {
        match code {
            16 => Ok(ElementType::Short),
            20 => Ok(ElementType::UShort),
            32 => Ok(ElementType::Long),
            -32 => Ok(ElementType::Float),
            -64 => Ok(ElementType::Double),
            other => Err(ChunkError::UnsupportedType(other)),
        }
    }

    /// The container type code for this element type.
    pub fn code(self) -> i32 {
        match self {
            ElementType::Short => 16,
            ElementType::UShort => 20,
            ElementType::Long => 32,
            ElementType::Float => -32,
            ElementType::Double => -64,
        }
    }

    /// Width of a single element in bytes.
    pub fn byte_size(self) -> usize {
        match self {
            ElementType::Short | ElementType::UShort => 2,
            ElementType::Long | ElementType::Float => 4,
            ElementType::Double => 8,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Short => "short",
            ElementType::UShort => "ushort",
            ElementType::Long => "long",
            ElementType::Float => "float",
            ElementType::Double => "double",
        };
        write!(f, "{name} ({})", self.code())
    }
}

/// Byte width for a raw type code.
pub fn element_byte_size(code: i32) -> ChunkResult<usize> {
    ElementType::from_code(code).map(ElementType::byte_size)
}
