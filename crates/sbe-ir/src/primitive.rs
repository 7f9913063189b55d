//! The fixed set of primitive encodings.

use std::fmt;
use std::str::FromStr;

use crate::{IrError, PrimitiveValue};

/// Primitive types a leaf encoding may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 11] = [
        PrimitiveType::Char,
        PrimitiveType::Int8,
        PrimitiveType::Int16,
        PrimitiveType::Int32,
        PrimitiveType::Int64,
        PrimitiveType::Uint8,
        PrimitiveType::Uint16,
        PrimitiveType::Uint32,
        PrimitiveType::Uint64,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    /// Canonical schema name, e.g. `"uint16"`.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Char => "char",
            PrimitiveType::Int8 => "int8",
            PrimitiveType::Int16 => "int16",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Uint8 => "uint8",
            PrimitiveType::Uint16 => "uint16",
            PrimitiveType::Uint32 => "uint32",
            PrimitiveType::Uint64 => "uint64",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Encoded size in bytes. This alone selects the accessor width.
    pub fn size(self) -> usize {
        match self {
            PrimitiveType::Char | PrimitiveType::Int8 | PrimitiveType::Uint8 => 1,
            PrimitiveType::Int16 | PrimitiveType::Uint16 => 2,
            PrimitiveType::Int32 | PrimitiveType::Uint32 | PrimitiveType::Float => 4,
            PrimitiveType::Int64 | PrimitiveType::Uint64 | PrimitiveType::Double => 8,
        }
    }

    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            PrimitiveType::Uint8
                | PrimitiveType::Uint16
                | PrimitiveType::Uint32
                | PrimitiveType::Uint64
        )
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, PrimitiveType::Float | PrimitiveType::Double)
    }

    /// Default minimum valid value.
    pub fn min_value(self) -> PrimitiveValue {
        match self {
            PrimitiveType::Char => PrimitiveValue::Int(0x20),
            PrimitiveType::Int8 => PrimitiveValue::Int(i8::MIN as i64 + 1),
            PrimitiveType::Int16 => PrimitiveValue::Int(i16::MIN as i64 + 1),
            PrimitiveType::Int32 => PrimitiveValue::Int(i32::MIN as i64 + 1),
            PrimitiveType::Int64 => PrimitiveValue::Int(i64::MIN + 1),
            PrimitiveType::Uint8
            | PrimitiveType::Uint16
            | PrimitiveType::Uint32
            | PrimitiveType::Uint64 => PrimitiveValue::UInt(0),
            PrimitiveType::Float => PrimitiveValue::Float(-f32::MAX),
            PrimitiveType::Double => PrimitiveValue::Double(-f64::MAX),
        }
    }

    /// Default maximum valid value.
    pub fn max_value(self) -> PrimitiveValue {
        match self {
            PrimitiveType::Char => PrimitiveValue::Int(0x7e),
            PrimitiveType::Int8 => PrimitiveValue::Int(i8::MAX as i64),
            PrimitiveType::Int16 => PrimitiveValue::Int(i16::MAX as i64),
            PrimitiveType::Int32 => PrimitiveValue::Int(i32::MAX as i64),
            PrimitiveType::Int64 => PrimitiveValue::Int(i64::MAX),
            PrimitiveType::Uint8 => PrimitiveValue::UInt(u8::MAX as u64 - 1),
            PrimitiveType::Uint16 => PrimitiveValue::UInt(u16::MAX as u64 - 1),
            PrimitiveType::Uint32 => PrimitiveValue::UInt(u32::MAX as u64 - 1),
            PrimitiveType::Uint64 => PrimitiveValue::UInt(u64::MAX - 1),
            PrimitiveType::Float => PrimitiveValue::Float(f32::MAX),
            PrimitiveType::Double => PrimitiveValue::Double(f64::MAX),
        }
    }

    /// Default null sentinel, used for absent optional values.
    pub fn null_value(self) -> PrimitiveValue {
        match self {
            PrimitiveType::Char => PrimitiveValue::Int(0),
            PrimitiveType::Int8 => PrimitiveValue::Int(i8::MIN as i64),
            PrimitiveType::Int16 => PrimitiveValue::Int(i16::MIN as i64),
            PrimitiveType::Int32 => PrimitiveValue::Int(i32::MIN as i64),
            PrimitiveType::Int64 => PrimitiveValue::Int(i64::MIN),
            PrimitiveType::Uint8 => PrimitiveValue::UInt(u8::MAX as u64),
            PrimitiveType::Uint16 => PrimitiveValue::UInt(u16::MAX as u64),
            PrimitiveType::Uint32 => PrimitiveValue::UInt(u32::MAX as u64),
            PrimitiveType::Uint64 => PrimitiveValue::UInt(u64::MAX),
            PrimitiveType::Float => PrimitiveValue::Float(f32::NAN),
            PrimitiveType::Double => PrimitiveValue::Double(f64::NAN),
        }
    }

    /// Looks a primitive type up by its canonical name.
    pub fn lookup(name: &str) -> Result<Self, IrError> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| IrError::UnknownPrimitiveType(name.to_string()))
    }
}

impl FromStr for PrimitiveType {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
