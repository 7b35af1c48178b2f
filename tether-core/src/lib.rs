#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod shape;
pub use shape::*;

mod scalar;
pub use scalar::*;

mod slot;
pub use slot::*;

mod impls;

pub mod convert;

mod view;
pub use view::*;

mod macros;
