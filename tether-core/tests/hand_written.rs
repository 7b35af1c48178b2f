//! Records described by hand instead of through `record!`.

use std::any::TypeId;

use tether_core::{
    Bindable, Field, FieldFlags, MutableString, Record, RecordType, Scalar, Shape, Slot, Ty,
    ViewBinding, shape_of, walk_mut,
};
use tether_testhelpers::{setup, tree};
use tether_value::Value;

/// An interface-like slot with no capability the binder knows.
#[derive(Default)]
struct Plugin;

impl Slot for Plugin {}

impl Bindable for Plugin {
    const SHAPE: &'static Shape = &Shape {
        id: TypeId::of::<Plugin>,
        type_identifier: "Plugin",
        ty: Ty::Contract,
    };
}

#[derive(Default)]
struct Service {
    name: Option<MutableString>,
    retries: u8,
    plugin: Plugin,
}

impl Slot for Service {
    fn record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self)
    }
}

impl Record for Service {
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Slot> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.retries),
            2 => Some(&mut self.plugin),
            _ => None,
        }
    }
}

impl Bindable for Service {
    const SHAPE: &'static Shape = &Shape {
        id: TypeId::of::<Service>,
        type_identifier: "Service",
        ty: Ty::Record(RecordType {
            fields: &[
                Field {
                    name: "name",
                    shape: shape_of::<Option<MutableString>>,
                    annotation: None,
                    flags: FieldFlags::PUBLIC,
                    doc: &[],
                },
                Field {
                    name: "retries",
                    shape: shape_of::<u8>,
                    annotation: Some("policy.retries,convert"),
                    flags: FieldFlags::PUBLIC,
                    doc: &[],
                },
                Field {
                    name: "plugin",
                    shape: shape_of::<Plugin>,
                    annotation: None,
                    flags: FieldFlags::PUBLIC,
                    doc: &[],
                },
            ],
        }),
    };
}

#[test]
fn hand_written_shape_is_usable() {
    setup();
    let rec = Service::SHAPE.as_record().unwrap();
    assert_eq!(rec.fields.len(), 3);
    assert!(matches!(rec.fields[2].shape().ty, Ty::Contract));
    assert_eq!(rec.fields[1].shape().type_identifier, "u8");
}

#[test]
fn slots_write_through_the_index_chain() {
    setup();
    let root = tree(r#"{"name": "api"}"#);
    let mut svc = Service::default();

    let slot = walk_mut(&mut svc, &[0]).unwrap();
    assert!(slot.put_view(ViewBinding::new(root.clone(), "name")));
    let slot = walk_mut(&mut svc, &[1]).unwrap();
    assert!(slot.put_scalar(Scalar::U8(3)));
    let slot = walk_mut(&mut svc, &[2]).unwrap();
    assert!(!slot.put_value(Value::Null));

    assert_eq!(svc.retries, 3);
    let view = svc.name.as_ref().unwrap();
    assert_eq!(view.get(), "api");
    view.set("gateway");
    assert_eq!(root.get("name"), Some(Value::from("gateway")));
}
