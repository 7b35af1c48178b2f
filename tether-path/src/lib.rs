#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod annotation;
pub use annotation::{Annotation, Directive, Flags};

mod key_path;
pub use key_path::{IntoKeyPath, KeyPath};

pub mod navigate;
pub use navigate::{PathError, resolve};
