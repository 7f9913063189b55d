//! Primitive values for constants, sentinels and decoded scalars.

use std::fmt;

use crate::{IrError, PrimitiveType};

/// A single primitive value, or the bytes of a char array.
///
/// Signed integers and `char` are held as [`PrimitiveValue::Int`], unsigned
/// integers as [`PrimitiveValue::UInt`] so that `uint64` keeps its full range.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
}

impl PrimitiveValue {
    /// Parses the textual form used by schemas for constants and overrides.
    ///
    /// A `char` constant of more than one byte becomes [`PrimitiveValue::Bytes`].
    pub fn parse(primitive_type: PrimitiveType, text: &str) -> Result<Self, IrError> {
        let invalid = || IrError::InvalidValue {
            primitive_type,
            text: text.to_string(),
        };
        match primitive_type {
            PrimitiveType::Char => match text.as_bytes() {
                [] => Err(invalid()),
                [b] => Ok(PrimitiveValue::Int(*b as i64)),
                bytes => Ok(PrimitiveValue::Bytes(bytes.to_vec())),
            },
            PrimitiveType::Int8
            | PrimitiveType::Int16
            | PrimitiveType::Int32
            | PrimitiveType::Int64 => text
                .trim()
                .parse::<i64>()
                .map(PrimitiveValue::Int)
                .map_err(|_| invalid()),
            PrimitiveType::Uint8
            | PrimitiveType::Uint16
            | PrimitiveType::Uint32
            | PrimitiveType::Uint64 => text
                .trim()
                .parse::<u64>()
                .map(PrimitiveValue::UInt)
                .map_err(|_| invalid()),
            PrimitiveType::Float => text
                .trim()
                .parse::<f32>()
                .map(PrimitiveValue::Float)
                .map_err(|_| invalid()),
            PrimitiveType::Double => text
                .trim()
                .parse::<f64>()
                .map(PrimitiveValue::Double)
                .map_err(|_| invalid()),
        }
    }

    /// The value as a signed integer, if it is integral and fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PrimitiveValue::Int(v) => Some(*v),
            PrimitiveValue::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The value as an unsigned integer, if it is integral and non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            PrimitiveValue::Int(v) => u64::try_from(*v).ok(),
            PrimitiveValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a double, for any numeric representation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Int(v) => Some(*v as f64),
            PrimitiveValue::UInt(v) => Some(*v as f64),
            PrimitiveValue::Float(v) => Some(*v as f64),
            PrimitiveValue::Double(v) => Some(*v),
            PrimitiveValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            PrimitiveValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Whether this is a NaN float or double.
    pub fn is_nan(&self) -> bool {
        match self {
            PrimitiveValue::Float(v) => v.is_nan(),
            PrimitiveValue::Double(v) => v.is_nan(),
            _ => false,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Int(v) => write!(f, "{v}"),
            PrimitiveValue::UInt(v) => write!(f, "{v}"),
            PrimitiveValue::Float(v) => write!(f, "{v}"),
            PrimitiveValue::Double(v) => write!(f, "{v}"),
            PrimitiveValue::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
        }
    }
}
