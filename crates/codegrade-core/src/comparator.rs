//! Structural equality for grading comparisons
//!
//! Grading compares the value produced by a test expression against the
//! expected value supplied with the test case. Both sides arrive as
//! `serde_json::Value`, so equality is defined recursively over the JSON data
//! model: primitives by value, arrays elementwise in order, objects by key set
//! with order ignored. There is no coercion across types, and no cycle
//! detection (`Value` trees are acyclic by construction).

use serde_json::Value;

/// Deep structural equality between an actual and an expected value.
///
/// Numbers compare by numeric value, so `5` and `5.0` are equal regardless of
/// how the probe serialized them.
pub fn deep_equals(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| deep_equals(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| deep_equals(a, b)))
        }
        // Mixed kinds (array vs object, string vs number, ...) never coerce.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert!(deep_equals(&json!(5), &json!(5)));
        assert!(deep_equals(&json!(5.0), &json!(5)));
        assert!(deep_equals(&json!("abc"), &json!("abc")));
        assert!(deep_equals(&json!(true), &json!(true)));
        assert!(deep_equals(&json!(null), &json!(null)));
        assert!(!deep_equals(&json!(5), &json!(6)));
        assert!(!deep_equals(&json!("5"), &json!(5)));
        assert!(!deep_equals(&json!(false), &json!(null)));
    }

    #[test]
    fn test_nested_arrays_ordered() {
        assert!(deep_equals(&json!([1, [2, 3]]), &json!([1, [2, 3]])));
        assert!(!deep_equals(&json!([1, [2, 4]]), &json!([1, [2, 3]])));
        assert!(!deep_equals(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equals(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(deep_equals(&json!([]), &json!([])));
    }

    #[test]
    fn test_objects_key_order_ignored() {
        assert!(deep_equals(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
        assert!(!deep_equals(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equals(&json!({"a": 1, "b": 2}), &json!({"a": 1, "c": 2})));
        assert!(deep_equals(
            &json!({"user": {"scores": [90, 85]}}),
            &json!({"user": {"scores": [90, 85]}})
        ));
    }

    #[test]
    fn test_no_cross_type_coercion() {
        assert!(!deep_equals(&json!([1, 2]), &json!({"0": 1, "1": 2})));
        assert!(!deep_equals(&json!({}), &json!([])));
        assert!(!deep_equals(&json!(0), &json!(false)));
        assert!(!deep_equals(&json!(""), &json!(null)));
    }
}
