//! The conversion table.
//!
//! | value kind | directly assignable to | convertible to (with `convert`) |
//! |------------|------------------------|---------------------------------|
//! | number     | `f64`                  | any numeric scalar or alias     |
//! | string     | `String`               | `String` aliases                |
//! | bool       | `bool`                 | `bool` aliases                  |
//! | any        | `Value`                |                                 |
//!
//! Nothing crosses kinds: numbers never become strings or booleans and
//! the reverse.

use tether_value::{Value, ValueType};

use crate::{Scalar, ScalarType, Ty};

/// Whether a value of `kind` can be stored into `ty` without conversion.
pub fn assignable(kind: ValueType, ty: &Ty) -> bool {
    matches!(
        (kind, ty),
        (_, Ty::Dynamic)
            | (ValueType::Number, Ty::Scalar(ScalarType::F64))
            | (ValueType::String, Ty::Scalar(ScalarType::String))
            | (ValueType::Bool, Ty::Scalar(ScalarType::Bool))
    )
}

/// Whether a value of `kind` can be converted into `target`.
pub fn convertible(kind: ValueType, target: ScalarType) -> bool {
    match kind {
        ValueType::Number => target.is_numeric(),
        ValueType::String => target == ScalarType::String,
        ValueType::Bool => target == ScalarType::Bool,
        ValueType::Null | ValueType::Array | ValueType::Object => false,
    }
}

/// Produces the payload to write into a `target` slot, or `None` when
/// [`convertible`] would say no.
pub fn coerce(value: &Value, target: ScalarType) -> Option<Scalar> {
    match (value, target) {
        (Value::Number(n), _) => Scalar::from_f64(*n, target),
        (Value::String(s), ScalarType::String) => Some(Scalar::String(s.clone())),
        (Value::Bool(b), ScalarType::Bool) => Some(Scalar::Bool(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_assignability() {
        assert!(assignable(ValueType::Number, &Ty::Scalar(ScalarType::F64)));
        assert!(!assignable(ValueType::Number, &Ty::Scalar(ScalarType::F32)));
        assert!(!assignable(ValueType::Number, &Ty::Scalar(ScalarType::I64)));
        assert!(!assignable(ValueType::Number, &Ty::Alias(ScalarType::F64)));
        assert!(!assignable(ValueType::String, &Ty::Alias(ScalarType::String)));
        assert!(assignable(ValueType::Array, &Ty::Dynamic));
        assert!(assignable(ValueType::Null, &Ty::Dynamic));
    }

    #[test]
    fn conversion_stays_within_a_kind() {
        assert!(convertible(ValueType::Number, ScalarType::U8));
        assert!(convertible(ValueType::String, ScalarType::String));
        assert!(!convertible(ValueType::Number, ScalarType::String));
        assert!(!convertible(ValueType::Number, ScalarType::Bool));
        assert!(!convertible(ValueType::Bool, ScalarType::I32));
        assert!(!convertible(ValueType::String, ScalarType::F64));
        assert!(!convertible(ValueType::Null, ScalarType::F64));
    }

    #[test]
    fn coerce_agrees_with_convertible() {
        assert_eq!(
            coerce(&Value::Number(2000.5), ScalarType::I64),
            Some(Scalar::I64(2000))
        );
        assert_eq!(
            coerce(&Value::from("x"), ScalarType::String),
            Some(Scalar::String("x".into()))
        );
        assert_eq!(coerce(&Value::Bool(true), ScalarType::I8), None);
        assert_eq!(coerce(&Value::Number(1.0), ScalarType::Bool), None);
    }
}
