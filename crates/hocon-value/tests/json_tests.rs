/// Lifting JSON documents into `HoconValue` and mapping them back.
use hocon_value::{HoconError, HoconRoot, HoconValue};
use serde_json::json;

#[test]
fn scalars_keep_their_literal_text() {
    let v = HoconValue::from(json!({"n": null, "b": true, "i": 42, "f": 2.5, "s": "text"}));

    assert_eq!(v.get_child_object("n").unwrap().get_string(), "");
    assert!(v.get_child_object("b").unwrap().get_bool().unwrap());
    assert_eq!(v.get_child_object("i").unwrap().get_string(), "42");
    assert_eq!(v.get_child_object("f").unwrap().get_f64().unwrap(), 2.5);
    assert_eq!(v.get_child_object("s").unwrap().get_string(), "text");
}

#[test]
fn key_order_is_preserved() {
    let v = HoconValue::from_json_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let keys: Vec<&str> = v.get_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn nested_arrays_become_array_fragments() {
    let v = HoconValue::from_json_str(r#"{"sizes": ["1b", "2048"], "grid": [[1, 2], [3]]}"#)
        .unwrap();
    assert_eq!(
        v.get_child_object("sizes").unwrap().get_byte_size_list().unwrap(),
        vec![1, 2048]
    );
    let grid = v.get_child_object("grid").unwrap().get_array().unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0].get_i32_list().unwrap(), vec![1, 2]);
}

#[test]
fn invalid_json_is_reported() {
    let err = HoconValue::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, HoconError::Json(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn to_json_keeps_scalars_as_strings() {
    let v = HoconValue::from(json!({"port": 8080, "tags": ["a", "b"], "db": {"host": "x"}}));
    assert_eq!(
        v.to_json(),
        json!({"port": "8080", "tags": ["a", "b"], "db": {"host": "x"}})
    );
}

#[test]
fn to_json_of_empty_value_is_null() {
    assert_eq!(HoconValue::new().to_json(), serde_json::Value::Null);
}

#[test]
fn root_path_lookup_over_json_document() {
    let root = HoconRoot::new(
        HoconValue::from_json_str(r#"{"akka": {"actor": {"timeout": "3 s"}}}"#).unwrap(),
    );
    let timeout = root.get("akka.actor.timeout").unwrap();
    assert_eq!(timeout.get_duration(false).unwrap().num_seconds(), 3);
}
