//! Filling records from a decoded tree.

use tether::{
    FillError, MutableBool, MutableFloat, MutableString, Schema, Value, ValueType, alias, fill,
    record,
};
use tether_testhelpers::{dig, setup, tree};

record! {
    #[derive(Debug, Default)]
    pub struct Sub {
        #[tether = "field1"]
        pub field1: Option<Box<String>>,
        #[tether = "field2"]
        pub field2: Vec<Value>,
    }
}

alias! {
    #[derive(Debug, Default, PartialEq)]
    pub struct Label(pub String);
}

record! {
    #[derive(Debug, Default)]
    pub struct Everything {
        #[tether = "a.b.c,convert"]
        pub float_convert: i64,
        #[tether = "a.b.c"]
        pub float_value: f64,
        #[tether = "a.b.c"]
        pub float_view: Option<MutableFloat>,
        pub string_value: String,
        #[tether = "string_value,convert"]
        pub label: Label,
        #[tether = "-"]
        pub ignored: String,
        #[tether = ",optional"]
        pub optional_value: String,
        #[tether = "string_value"]
        pub string_view: Option<MutableString>,
        #[tether = "a.b.f"]
        pub flag: bool,
        #[tether = "a.b.d"]
        pub sub: Sub,
        #[tether = "a.e"]
        pub subs: Vec<Sub>,
        #[tether = "a.e"]
        pub generic: Value,
        #[tether = "a.e"]
        pub generic_ref: Option<Box<Vec<Value>>>,
    }
}

const EVERYTHING: &str = r#"{
    "a": {
        "b": {
            "c": 2000,
            "d": {"field1": "foobar", "field2": ["bar", 10, 20]},
            "f": true
        },
        "e": [{"field1": "asdf"}, {"field2": ["1", "2"]}],
        "g": {
            "f": false,
            "a": {"e": [], "b": {"c": 5000, "d": [], "f": true}},
            "string_value": "barbaz"
        }
    },
    "string_value": "foobar",
    "optional_value": "foobar2",
    "ignored": "never read"
}"#;

#[test]
fn fills_every_kind_of_field() {
    setup();
    let data = tree(EVERYTHING);
    let mut out = Everything::default();
    fill(&mut out, "", &data).unwrap();

    assert_eq!(out.float_convert, 2000);
    assert_eq!(out.float_value, 2000.0);
    assert_eq!(out.float_view.as_ref().unwrap().get(), 2000.0);
    assert_eq!(out.string_value, "foobar");
    assert_eq!(out.label, Label("foobar".into()));
    assert_eq!(out.optional_value, "foobar2");
    assert_eq!(out.ignored, "");
    assert_eq!(out.string_view.as_ref().unwrap().get(), "foobar");
    assert!(out.flag);
    assert!(out.generic.is_array());
    assert_eq!(out.generic.as_array().map(|a| a.len()), Some(2));

    // located but not decomposed
    assert!(out.sub.field1.is_none());
    assert!(out.sub.field2.is_empty());
    assert!(out.subs.is_empty());
    assert!(out.generic_ref.is_none());
}

#[test]
fn view_writes_survive_a_refill() {
    setup();
    let data = tree(EVERYTHING);
    let mut out = Everything::default();
    fill(&mut out, "", &data).unwrap();

    let view = out.float_view.as_ref().unwrap();
    view.set(4000.0);
    assert_eq!(view.get(), 4000.0);
    assert_eq!(dig(&data, "a.b.c"), Some(Value::Number(4000.0)));

    let mut again = Everything::default();
    fill(&mut again, "", &data).unwrap();
    assert_eq!(again.float_view.as_ref().unwrap().get(), 4000.0);
    assert_eq!(again.float_value, 4000.0);
}

#[test]
fn base_path_rebases_every_field() {
    setup();
    let data = tree(EVERYTHING);
    let mut out = Everything::default();
    fill(&mut out, "a.g", &data).unwrap();

    assert_eq!(out.string_value, "barbaz");
    assert_eq!(out.float_convert, 5000);
    assert_eq!(out.float_value, 5000.0);
    assert_eq!(out.optional_value, "");
    assert_eq!(out.ignored, "");
    assert!(out.flag);
    assert_eq!(out.generic, Value::Array(Vec::new()));
}

#[test]
fn same_key_bound_by_several_fields() {
    let schema = Schema::for_type::<Everything>().unwrap();
    assert_eq!(schema.bound_to("a.b.c").count(), 3);
    assert_eq!(schema.bound_to("a.e").count(), 3);
    assert_eq!(schema.bound_to("ignored").count(), 0);

    let convert = schema
        .bound_to("a.b.c")
        .find(|f| f.convert)
        .expect("one a.b.c field converts");
    assert_eq!(convert.path, ["a", "b"]);
    assert!(convert.named);
    assert_eq!(convert.shape.type_identifier, "i64");

    let optional = schema.bound_to("optional_value").next().unwrap();
    assert!(optional.optional);
    assert!(!optional.named);
    assert!(optional.path.is_empty());
}

record! {
    #[derive(Debug, Default)]
    pub struct B {
        #[tether = "c,convert"]
        pub c: i64,
        #[tether = "d.field1"]
        pub field1: String,
        pub e: Option<MutableFloat>,
    }
}

#[test]
fn nested_example() {
    setup();
    let data = tree(
        r#"{"a": {"b": {"c": 2000.12354, "d": {"field1": "foobar"}, "e": 432.1}}}"#,
    );
    let mut b = B::default();
    fill(&mut b, "a.b", &data).unwrap();

    assert_eq!(b.c, 2000);
    assert_eq!(b.field1, "foobar");
    let e = b.e.as_ref().unwrap();
    assert_eq!(e.get(), 432.1);

    e.set(100.34);
    assert_eq!(e.get(), 100.34);
    assert_eq!(dig(&data, "a.b.e"), Some(Value::Number(100.34)));
}

record! {
    #[derive(Debug, Default)]
    pub struct Toggles {
        #[tether = "features.tls"]
        pub tls: Option<MutableBool>,
    }
}

#[test]
fn bool_view_writes_through() {
    setup();
    let data = tree(r#"{"server": {"features": {"tls": false}}}"#);
    let mut t = Toggles::default();
    fill(&mut t, "server", &data).unwrap();

    let tls = t.tls.as_ref().unwrap();
    assert_eq!(tls.get_checked(), (false, true));

    tls.set(true);
    assert!(tls.get());
    assert_eq!(dig(&data, "server.features.tls"), Some(Value::Bool(true)));
}

record! {
    #[derive(Debug, Default)]
    pub struct Scenario {
        #[tether = "c,convert"]
        pub c: i64,
        #[tether = "e,optional"]
        pub e: Option<MutableFloat>,
    }
}

record! {
    #[derive(Debug, Default)]
    pub struct Strict {
        #[tether = "c"]
        pub c: i64,
    }
}

#[test]
fn convert_truncates_and_optional_view_stays_unbound() {
    setup();
    let data = tree(r#"{"a": {"b": {"c": 2000.5}}}"#);
    let mut s = Scenario::default();
    fill(&mut s, "a.b", &data).unwrap();
    assert_eq!(s.c, 2000);
    assert!(s.e.is_none());
}

#[test]
fn without_convert_the_float_is_rejected() {
    setup();
    let data = tree(r#"{"a": {"b": {"c": 2000.5}}}"#);
    let mut s = Strict::default();
    let err = fill(&mut s, "a.b", &data).unwrap_err();
    assert_eq!(
        err,
        FillError::IncompatibleAssignment {
            record: "Strict",
            path: "a.b".into(),
            name: "c",
            found: ValueType::Number,
            expected: "i64",
        }
    );
    insta::assert_snapshot!(
        err,
        @"cannot assign number from key 'c' at path 'a.b' to i64 in Strict"
    );
    assert_eq!(s.c, 0);
}

#[test]
fn base_path_forms_agree() {
    let data = tree(r#"{"a": {"b": {"c": 7}}}"#);
    let forms: Vec<Scenario> = vec![
        filled(&data, "a.b"),
        filled(&data, ["a", "b"]),
        filled(&data, vec!["a", "b"]),
        filled(&data, vec![String::from("a"), String::from("b")]),
        filled(&data, String::from("a.b")),
    ];
    for s in forms {
        assert_eq!(s.c, 7);
    }

    let root = tree(r#"{"c": 1}"#);
    assert_eq!(filled(&root, ()).c, 1);
    assert_eq!(filled(&root, "").c, 1);
}

fn filled(data: &tether::VObject, base: impl tether::IntoKeyPath) -> Scenario {
    let mut s = Scenario::default();
    fill(&mut s, base, data).unwrap();
    s
}

record! {
    #[derive(Debug, Default)]
    pub struct Extras {
        #[tether = "port,convert"]
        pub port: Option<Box<u16>>,
        #[tether = "ratio"]
        pub ratio: Option<Box<f64>>,
        pub meta: Value,
        secret: String,
    }
}

#[test]
fn indirect_scalars_dynamic_values_and_private_fields() {
    setup();
    let data = tree(r#"{"port": 8080.9, "ratio": 0.25, "meta": {"k": "v"}, "secret": "s"}"#);
    let mut x = Extras::default();
    fill(&mut x, (), &data).unwrap();

    assert_eq!(x.port.as_deref(), Some(&8080));
    assert_eq!(x.ratio.as_deref(), Some(&0.25));
    assert_eq!(x.secret, "");

    // object values are shared handles onto the tree
    let Value::Object(meta) = &x.meta else {
        panic!("meta should be an object, got {:?}", x.meta)
    };
    meta.insert("k", "changed");
    assert_eq!(dig(&data, "meta.k"), Some(Value::from("changed")));
}

#[test]
fn failed_fill_keeps_earlier_fields() {
    setup();
    let data = tree(r#"{"port": 1, "ratio": 2}"#);
    let mut x = Extras::default();
    let err = fill(&mut x, (), &data).unwrap_err();
    assert!(matches!(err, FillError::MissingKey { name: "meta", .. }));
    assert_eq!(x.port.as_deref(), Some(&1));
    assert_eq!(x.ratio.as_deref(), Some(&2.0));
}
