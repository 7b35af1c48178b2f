//! Trees decoded from JSON share their nested objects.

use tether_testhelpers::{dig, setup, tree};
use tether_value::{VObject, Value, ValueType, value};

#[test]
fn writes_through_a_nested_handle_show_up_in_the_encoding() {
    setup();
    let root = tree(r#"{"a": {"b": {"c": 2000.5}}, "list": [1, "two", null]}"#);
    let Some(Value::Object(a)) = root.get("a") else {
        panic!("a should be an object")
    };
    let Some(Value::Object(b)) = a.get("b") else {
        panic!("a.b should be an object")
    };
    b.insert("c", 4000.0);
    b.insert("d", true);

    assert_eq!(dig(&root, "a.b.c"), Some(Value::Number(4000.0)));
    let json = root.to_json();
    assert_eq!(json["a"]["b"]["d"], true);
    assert_eq!(root.value_type_of("list"), Some(ValueType::Array));
}

#[test]
fn deep_clone_detaches() {
    setup();
    let root = tree(r#"{"a": {"b": 1}}"#);
    let copy = root.deep_clone();
    let Some(Value::Object(a)) = root.get("a") else {
        panic!("a should be an object")
    };
    a.insert("b", 2.0);
    assert_eq!(dig(&copy, "a.b"), Some(Value::Number(1.0)));
    assert_eq!(dig(&root, "a.b"), Some(Value::Number(2.0)));
}

#[test]
fn value_macro_builds_the_same_tree() {
    let built = value!({"x": [1, 2], "y": {"z": "s"}});
    let decoded = tree(r#"{"x": [1, 2], "y": {"z": "s"}}"#);
    assert_eq!(built, Value::Object(decoded));
}

#[test]
fn top_level_must_be_an_object() {
    let err = VObject::from_json_str("[1, 2]").unwrap_err();
    assert_eq!(err.to_string(), "expected a JSON object at the root, found array");
}
