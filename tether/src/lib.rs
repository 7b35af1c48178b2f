#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

// Logging macros are defined textually so every module sees them without an
// import, whichever way the `tracing` feature is set.
#[cfg(feature = "tracing")]
/// Forwards to tracing::trace
macro_rules! trace {
    ($($tt:tt)*) => { ::tracing::trace!($($tt)*) };
}
#[cfg(feature = "tracing")]
/// Forwards to tracing::debug
macro_rules! debug {
    ($($tt:tt)*) => { ::tracing::debug!($($tt)*) };
}

#[cfg(not(feature = "tracing"))]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}

mod error;
pub use error::*;

mod schema;
pub use schema::*;

mod cache;

mod fill;
pub use fill::*;

pub use tether_core::{
    Bindable, Capability, Field, FieldFlags, Mutable, MutableBool, MutableFloat, MutableString,
    Record, RecordType, Scalar, ScalarType, Shape, Slot, Ty, ViewBinding, alias, convert, record,
    shape_of,
};
pub use tether_path::{IntoKeyPath, KeyPath, PathError};
pub use tether_value::{VObject, Value, ValueType};

#[cfg(feature = "json")]
pub use tether_value::{JsonError, value};
