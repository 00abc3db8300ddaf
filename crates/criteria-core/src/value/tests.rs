use crate::{traits::FieldValue, value::Value};

#[test]
fn primitives_map_to_their_variant() {
    assert_eq!(7i32.to_value(), Value::Int(7));
    assert_eq!(7u16.to_value(), Value::Uint(7));
    assert_eq!(true.to_value(), Value::Bool(true));
    assert_eq!("tom".to_value(), Value::Text("tom".to_string()));
    assert_eq!(String::from("tom").to_value(), Value::Text("tom".to_string()));
    assert_eq!(1.5f32.to_value(), Value::Float(1.5));
}

#[test]
fn none_becomes_null() {
    let missing: Option<i64> = None;

    assert_eq!(missing.to_value(), Value::Null);
    assert_eq!(Some(3i64).to_value(), Value::Int(3));
    assert!(missing.to_value().is_null());
}

#[test]
fn list_preserves_order() {
    let list = Value::list([3, 1, 2]);

    assert_eq!(
        list,
        Value::List(vec![Value::Int(3), Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn display_is_readable() {
    let list = Value::List(vec![Value::Text("a".to_string()), Value::Null, Value::Uint(9)]);

    assert_eq!(list.to_string(), "['a', null, 9]");
}

#[test]
fn serde_round_trip_keeps_shape() {
    let value = Value::List(vec![Value::Int(-1), Value::Text("x".to_string())]);
    let json = serde_json::to_string(&value).expect("serialize value");
    let back: Value = serde_json::from_str(&json).expect("deserialize value");

    assert_eq!(back, value);
}
