/// Declares a struct and implements [`Bindable`](crate::Bindable),
/// [`Slot`](crate::Slot) and [`Record`](crate::Record) for it.
///
/// Each field may carry, in this order: doc comments, a binding
/// annotation `#[tether = "a.b.c,convert,optional"]`, and the
/// `#[tether(flatten)]` marker. Fields without a visibility qualifier are
/// recorded but ignored by the binder.
///
/// ```
/// use tether_core::{Bindable, record};
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Base {
///         pub id: String,
///     }
/// }
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct User {
///         #[tether(flatten)]
///         pub base: Base,
///         /// Display name.
///         #[tether = "profile.name"]
///         pub name: String,
///     }
/// }
///
/// let rec = User::SHAPE.as_record().unwrap();
/// assert!(rec.fields[0].is_flatten());
/// assert_eq!(rec.fields[1].annotation, Some("profile.name"));
/// assert_eq!(rec.fields[1].doc, &[" Display name."]);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:expr])*
                $(#[tether = $ann:literal])?
                $(#[tether($marker:ident)])?
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::Bindable for $name {
            const SHAPE: &'static $crate::Shape = &$crate::Shape {
                id: ::core::any::TypeId::of::<$name>,
                type_identifier: ::core::stringify!($name),
                ty: $crate::Ty::Record($crate::RecordType {
                    fields: &[
                        $(
                            $crate::Field {
                                name: ::core::stringify!($field),
                                shape: $crate::shape_of::<$fty>,
                                annotation: $crate::__tether_annotation!($($ann)?),
                                flags: $crate::FieldFlags::from_markers(
                                    !::core::stringify!($fvis).is_empty(),
                                    false $(|| $crate::__tether_marker!($marker))?,
                                ),
                                doc: &[$($doc),*],
                            },
                        )*
                    ],
                }),
            };
        }

        impl $crate::Slot for $name {
            fn record_mut(&mut self) -> ::core::option::Option<&mut dyn $crate::Record> {
                ::core::option::Option::Some(self)
            }
        }

        impl $crate::Record for $name {
            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn $crate::Slot> {
                let mut i = 0usize;
                $(
                    if i == index {
                        return ::core::option::Option::Some(&mut self.$field);
                    }
                    i += 1;
                )*
                ::core::option::Option::None
            }
        }
    };
}

/// Declares a named scalar subtype.
///
/// The new type binds like its inner scalar, except that a value is never
/// directly assignable to it: the field needs the `convert` flag.
///
/// ```
/// use tether_core::{Bindable, ScalarType, Ty, alias};
///
/// alias! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Port(pub u16);
/// }
///
/// assert!(matches!(Port::SHAPE.ty, Ty::Alias(ScalarType::U16)));
/// ```
#[macro_export]
macro_rules! alias {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($ivis:vis $inner:ty);
    ) => {
        $(#[$meta])*
        $vis struct $name($ivis $inner);

        impl $crate::Slot for $name {
            fn put_scalar(&mut self, scalar: $crate::Scalar) -> bool {
                $crate::Slot::put_scalar(&mut self.0, scalar)
            }
        }

        impl $crate::Bindable for $name {
            const SHAPE: &'static $crate::Shape = &$crate::Shape::alias::<$name>(
                ::core::stringify!($name),
                <$inner as $crate::Bindable>::SHAPE,
            );
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tether_annotation {
    () => {
        ::core::option::Option::None
    };
    ($ann:literal) => {
        ::core::option::Option::Some($ann)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tether_marker {
    (flatten) => {
        true
    };
    ($other:ident) => {
        ::core::compile_error!(::core::concat!(
            "unknown tether marker `",
            ::core::stringify!($other),
            "`, expected `flatten`"
        ))
    };
}
