//! Live views: field values that stay attached to one entry of the tree.
//!
//! A view never caches. [`Mutable::get`] reads the entry each time and
//! [`Mutable::set`] overwrites it, so writes are visible to anyone holding
//! the tree, and writes made through the tree are visible to the view.

use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use tether_value::{VObject, Value, ValueType};

/// The capabilities a view can offer. The fill engine matches on this
/// exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Read and write an `f64`.
    Number,
    /// Read and write a `String`.
    String,
    /// Read and write a `bool`.
    Bool,
}

impl Capability {
    /// The value kind an entry must have for this capability to bind.
    pub const fn value_type(self) -> ValueType {
        match self {
            Capability::Number => ValueType::Number,
            Capability::String => ValueType::String,
            Capability::Bool => ValueType::Bool,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Number => f.write_str("number view"),
            Capability::String => f.write_str("string view"),
            Capability::Bool => f.write_str("bool view"),
        }
    }
}

/// The container and key a view is attached to.
#[derive(Clone, Debug)]
pub struct ViewBinding {
    container: VObject,
    key: String,
}

impl ViewBinding {
    /// Attaches to `key` in `container`. `container` is a shared handle.
    pub fn new(container: VObject, key: impl Into<String>) -> Self {
        Self {
            container,
            key: key.into(),
        }
    }

    /// The key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The container.
    pub fn container(&self) -> &VObject {
        &self.container
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for alloc::string::String {}
    impl Sealed for bool {}
}

/// A type a [`Mutable`] view can read and write. Sealed.
pub trait ViewTarget: sealed::Sealed + Default + Sized + 'static {
    /// The capability this target provides.
    const CAPABILITY: Capability;

    /// Diagnostic name of the view slot.
    const VIEW_NAME: &'static str;

    /// Reads the entry, if it has the right kind.
    fn extract(value: &Value) -> Option<Self>;

    /// Converts back into a tree value.
    fn into_value(self) -> Value;
}

impl ViewTarget for f64 {
    const CAPABILITY: Capability = Capability::Number;
    const VIEW_NAME: &'static str = "MutableFloat";

    fn extract(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl ViewTarget for String {
    const CAPABILITY: Capability = Capability::String;
    const VIEW_NAME: &'static str = "MutableString";

    fn extract(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl ViewTarget for bool {
    const CAPABILITY: Capability = Capability::Bool;
    const VIEW_NAME: &'static str = "MutableBool";

    fn extract(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

/// A live view onto one entry of the tree.
pub struct Mutable<T: ViewTarget> {
    binding: ViewBinding,
    _target: PhantomData<fn() -> T>,
}

/// A live number.
pub type MutableFloat = Mutable<f64>;

/// A live string.
pub type MutableString = Mutable<String>;

/// A live boolean.
pub type MutableBool = Mutable<bool>;

impl<T: ViewTarget> Mutable<T> {
    /// Attaches a view. The entry is not checked.
    pub fn new(binding: ViewBinding) -> Self {
        Self {
            binding,
            _target: PhantomData,
        }
    }

    /// The current value, or the zero value if the entry is gone or holds
    /// another kind.
    pub fn get(&self) -> T {
        self.get_checked().0
    }

    /// The current value and whether the entry still has the right kind.
    /// On `false` the value is the zero value.
    pub fn get_checked(&self) -> (T, bool) {
        self.binding
            .container
            .inspect(&self.binding.key, |entry| match entry.and_then(T::extract) {
                Some(v) => (v, true),
                None => (T::default(), false),
            })
    }

    /// Overwrites the entry, whatever it currently holds.
    pub fn set(&self, value: impl Into<T>) {
        self.binding
            .container
            .insert(self.binding.key.clone(), value.into().into_value());
    }

    /// The key this view reads.
    pub fn key(&self) -> &str {
        self.binding.key()
    }

    /// The container this view reads from.
    pub fn container(&self) -> &VObject {
        self.binding.container()
    }
}

impl<T: ViewTarget> Clone for Mutable<T> {
    fn clone(&self) -> Self {
        Self::new(self.binding.clone())
    }
}

impl<T: ViewTarget + fmt::Debug> fmt::Debug for Mutable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(T::VIEW_NAME)
            .field("key", &self.binding.key)
            .field("current", &self.get_checked())
            .finish()
    }
}
