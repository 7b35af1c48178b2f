#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod value;
pub use value::*;

mod object;
pub use object::*;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::JsonError;

#[cfg(feature = "json")]
mod macros;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "json")]
    pub use serde_json;
}
