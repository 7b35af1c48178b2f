//! Scalar types a field can hold, and scalar payloads to write into them.

use alloc::string::String;
use core::fmt;

/// All scalar types a record field can be declared with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ScalarType {
    /// `bool`.
    Bool,
    /// `alloc::string::String`.
    String,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `isize`.
    ISize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `usize`.
    USize,
}

impl ScalarType {
    /// Rust spelling of the type.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::String => "String",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::ISize => "isize",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::USize => "usize",
        }
    }

    /// Returns `true` for integers and floats.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, ScalarType::Bool | ScalarType::String)
    }

    /// Returns `true` for signed and unsigned integers.
    pub const fn is_integer(self) -> bool {
        self.is_numeric() && !matches!(self, ScalarType::F32 | ScalarType::F64)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed scalar ready to be written into a field of the matching
/// [`ScalarType`].
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Scalar {
    Bool(bool),
    String(String),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    ISize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    USize(usize),
}

impl Scalar {
    /// The type this payload can be written into.
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::String(_) => ScalarType::String,
            Scalar::F32(_) => ScalarType::F32,
            Scalar::F64(_) => ScalarType::F64,
            Scalar::I8(_) => ScalarType::I8,
            Scalar::I16(_) => ScalarType::I16,
            Scalar::I32(_) => ScalarType::I32,
            Scalar::I64(_) => ScalarType::I64,
            Scalar::ISize(_) => ScalarType::ISize,
            Scalar::U8(_) => ScalarType::U8,
            Scalar::U16(_) => ScalarType::U16,
            Scalar::U32(_) => ScalarType::U32,
            Scalar::U64(_) => ScalarType::U64,
            Scalar::USize(_) => ScalarType::USize,
        }
    }

    /// Narrows or widens a number into `target`.
    ///
    /// Integers truncate toward zero and saturate at their bounds; NaN
    /// becomes zero. Returns `None` for non-numeric targets.
    pub fn from_f64(n: f64, target: ScalarType) -> Option<Self> {
        Some(match target {
            ScalarType::F64 => Scalar::F64(n),
            ScalarType::F32 => Scalar::F32(n as f32),
            ScalarType::I8 => Scalar::I8(n as i8),
            ScalarType::I16 => Scalar::I16(n as i16),
            ScalarType::I32 => Scalar::I32(n as i32),
            ScalarType::I64 => Scalar::I64(n as i64),
            ScalarType::ISize => Scalar::ISize(n as isize),
            ScalarType::U8 => Scalar::U8(n as u8),
            ScalarType::U16 => Scalar::U16(n as u16),
            ScalarType::U32 => Scalar::U32(n as u32),
            ScalarType::U64 => Scalar::U64(n as u64),
            ScalarType::USize => Scalar::USize(n as usize),
            ScalarType::Bool | ScalarType::String => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_to_integer_truncates_and_saturates() {
        assert_eq!(Scalar::from_f64(2000.5, ScalarType::I64), Some(Scalar::I64(2000)));
        assert_eq!(Scalar::from_f64(-1.9, ScalarType::I32), Some(Scalar::I32(-1)));
        assert_eq!(Scalar::from_f64(300.0, ScalarType::U8), Some(Scalar::U8(255)));
        assert_eq!(Scalar::from_f64(-5.0, ScalarType::U16), Some(Scalar::U16(0)));
        assert_eq!(Scalar::from_f64(f64::NAN, ScalarType::I8), Some(Scalar::I8(0)));
    }

    #[test]
    fn non_numeric_targets_refuse_numbers() {
        assert_eq!(Scalar::from_f64(1.0, ScalarType::Bool), None);
        assert_eq!(Scalar::from_f64(1.0, ScalarType::String), None);
    }

    #[test]
    fn classification() {
        assert!(ScalarType::U8.is_integer());
        assert!(ScalarType::F32.is_numeric());
        assert!(!ScalarType::F32.is_integer());
        assert!(!ScalarType::String.is_numeric());
        assert_eq!(Scalar::F32(1.0).scalar_type(), ScalarType::F32);
    }
}
