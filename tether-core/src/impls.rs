use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;

use tether_value::Value;

use crate::{
    Bindable, Mutable, Record, Scalar, ScalarType, Shape, Slot, Ty, ViewBinding, ViewTarget,
    shape_of,
};

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Slot for $ty {
                fn put_scalar(&mut self, scalar: Scalar) -> bool {
                    match scalar {
                        Scalar::$variant(v) => {
                            *self = v;
                            true
                        }
                        _ => false,
                    }
                }
            }

            impl Bindable for $ty {
                const SHAPE: &'static Shape =
                    &const { Shape::scalar::<$ty>(stringify!($ty), ScalarType::$variant) };
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    String => String,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => ISize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => USize,
}

impl<T: Bindable> Slot for Vec<T> {}

impl<T: Bindable> Bindable for Vec<T> {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: TypeId::of::<Vec<T>>,
            type_identifier: "Vec",
            ty: Ty::Sequence(shape_of::<T>),
        }
    };
}

impl<T: Bindable + Default> Slot for Option<Box<T>> {
    fn put_scalar(&mut self, scalar: Scalar) -> bool {
        match self {
            Some(inner) => inner.put_scalar(scalar),
            None => {
                let mut inner = Box::<T>::default();
                let accepted = inner.put_scalar(scalar);
                if accepted {
                    *self = Some(inner);
                }
                accepted
            }
        }
    }

    fn record_mut(&mut self) -> Option<&mut dyn Record> {
        self.get_or_insert_with(Box::default).record_mut()
    }
}

impl<T: Bindable + Default> Bindable for Option<Box<T>> {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: TypeId::of::<Option<Box<T>>>,
            type_identifier: "Option<Box>",
            ty: Ty::Pointer(shape_of::<T>),
        }
    };
}

impl Slot for Value {
    fn put_value(&mut self, value: Value) -> bool {
        *self = value;
        true
    }
}

impl Bindable for Value {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: TypeId::of::<Value>,
            type_identifier: "Value",
            ty: Ty::Dynamic,
        }
    };
}

impl<T: ViewTarget> Slot for Option<Mutable<T>> {
    fn put_view(&mut self, binding: ViewBinding) -> bool {
        *self = Some(Mutable::new(binding));
        true
    }
}

impl<T: ViewTarget> Bindable for Option<Mutable<T>> {
    const SHAPE: &'static Shape = &const {
        Shape {
            id: TypeId::of::<Option<Mutable<T>>>,
            type_identifier: T::VIEW_NAME,
            ty: Ty::View(T::CAPABILITY),
        }
    };
}
