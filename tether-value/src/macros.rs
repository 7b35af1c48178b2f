/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// ```
/// use tether_value::{Value, value};
///
/// let v = value!({ "a": { "b": [1, 2.5, "three", null] } });
/// let a = v.as_object().unwrap().get("a").unwrap();
/// assert!(a.as_object().unwrap().contains_key("b"));
/// assert_eq!(value!(2000.5), Value::Number(2000.5));
/// ```
#[macro_export]
macro_rules! value {
    ($($json:tt)+) => {
        $crate::Value::from($crate::__private::serde_json::json!($($json)+))
    };
}
