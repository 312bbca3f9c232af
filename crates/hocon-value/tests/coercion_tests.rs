/// Typed accessors on `HoconValue`: booleans, integers, floats, byte sizes,
/// durations and their list forms.
use chrono::Duration;
use hocon_value::{is_infinite, HoconElement, HoconError, HoconValue};

fn scalar(text: &str) -> HoconValue {
    HoconValue::from(HoconElement::literal(text))
}

fn literals(parts: &[&str]) -> HoconValue {
    parts.iter().map(|p| HoconElement::literal(*p)).collect()
}

fn list(items: &[&str]) -> HoconValue {
    HoconValue::from(HoconElement::Array(
        items.iter().map(|i| scalar(i)).collect(),
    ))
}

// ============================================================================
// Booleans
// ============================================================================

#[test]
fn bool_accepts_exactly_four_literals() {
    assert!(scalar("true").get_bool().unwrap());
    assert!(scalar("on").get_bool().unwrap());
    assert!(!scalar("false").get_bool().unwrap());
    assert!(!scalar("off").get_bool().unwrap());
}

#[test]
fn bool_rejects_other_spellings() {
    for text in ["True", "ON", "yes", "1", ""] {
        let err = scalar(text).get_bool().unwrap_err();
        assert!(
            matches!(err, HoconError::InvalidBoolean(ref t) if t == text),
            "{text}: {err}"
        );
    }
}

#[test]
fn bool_error_message_names_the_text() {
    let err = scalar("maybe").get_bool().unwrap_err();
    assert_eq!(err.to_string(), "Unknown boolean format: maybe");
}

// ============================================================================
// Integers and floats
// ============================================================================

#[test]
fn integers_of_each_width() {
    assert_eq!(scalar("-128").get_i8().unwrap(), -128);
    assert_eq!(scalar("2147483647").get_i32().unwrap(), i32::MAX);
    assert_eq!(scalar("-9000000000").get_i64().unwrap(), -9_000_000_000);
    assert_eq!(scalar("255").get_u8().unwrap(), 255);
}

#[test]
fn integer_overflow_is_an_error() {
    assert!(matches!(
        scalar("128").get_i8(),
        Err(HoconError::InvalidInteger { .. })
    ));
    assert!(matches!(
        scalar("2147483648").get_i32(),
        Err(HoconError::InvalidInteger { .. })
    ));
    assert!(matches!(
        scalar("256").get_u8(),
        Err(HoconError::InvalidInteger { .. })
    ));
    assert!(scalar("-1").get_u8().is_err());
}

#[test]
fn integer_rejects_non_numeric_text() {
    assert!(scalar("12abc").get_i64().is_err());
    assert!(scalar("1.5").get_i32().is_err());
    assert!(HoconValue::new().get_i32().is_err());
}

#[test]
fn integers_read_through_concatenation() {
    assert_eq!(literals(&["1", "2", "3"]).get_i32().unwrap(), 123);
    assert_eq!(literals(&[" ", "42", " "]).get_i64().unwrap(), 42);
}

#[test]
fn floats_parse_decimal_and_exponent_forms() {
    assert_eq!(scalar("3.5").get_f64().unwrap(), 3.5);
    assert_eq!(scalar("-1e3").get_f64().unwrap(), -1000.0);
    assert_eq!(scalar("0.25").get_f32().unwrap(), 0.25f32);
}

#[test]
fn malformed_float_is_an_error() {
    let err = scalar("3.5.1").get_f64().unwrap_err();
    assert!(matches!(err, HoconError::InvalidFloat { ref text, .. } if text == "3.5.1"));
    assert!(scalar("abc").get_f32().is_err());
}

// ============================================================================
// Byte sizes
// ============================================================================

#[test]
fn byte_size_with_and_without_suffix() {
    assert_eq!(scalar("1024b").get_byte_size().unwrap(), 1024);
    assert_eq!(scalar("2048").get_byte_size().unwrap(), 2048);
}

#[test]
fn byte_size_rejects_non_numeric_prefix() {
    assert!(matches!(
        scalar("xb").get_byte_size(),
        Err(HoconError::InvalidInteger { .. })
    ));
    assert!(scalar("1kb").get_byte_size().is_err());
}

// ============================================================================
// Durations
// ============================================================================

#[test]
fn duration_with_unit_suffix() {
    assert_eq!(
        scalar("500ms").get_duration(false).unwrap(),
        Duration::milliseconds(500)
    );
    assert_eq!(
        literals(&["2", " ", "s"]).get_duration(false).unwrap(),
        Duration::seconds(2)
    );
    assert_eq!(scalar("1d").get_duration(false).unwrap(), Duration::hours(24));
    assert_eq!(
        scalar("10 minutes").get_duration(false).unwrap(),
        Duration::minutes(10)
    );
    assert_eq!(scalar("7us").get_duration(false).unwrap(), Duration::microseconds(7));
}

#[test]
fn bare_number_is_milliseconds() {
    assert_eq!(
        scalar("10").get_duration(false).unwrap(),
        Duration::milliseconds(10)
    );
    assert_eq!(
        scalar("2.5").get_duration(false).unwrap(),
        Duration::microseconds(2500)
    );
}

#[test]
fn infinite_requires_permission() {
    let v = scalar("infinite");
    assert!(is_infinite(&v.get_duration(true).unwrap()));
    assert!(matches!(
        v.get_duration(false),
        Err(HoconError::InfiniteNotAllowed)
    ));
}

#[test]
fn infinite_sentinel_is_minus_one_nanosecond() {
    let d = scalar("INFINITE").get_duration(true).unwrap();
    assert_eq!(d, Duration::nanoseconds(-1));
}

#[test]
fn negative_duration_is_rejected() {
    let err = scalar("-5s").get_duration(true).unwrap_err();
    assert!(matches!(err, HoconError::NegativeDuration(ref t) if t == "-5"));
    assert_eq!(err.to_string(), "Expected a positive value instead of -5");
}

#[test]
fn unparseable_duration_is_rejected() {
    assert!(scalar("soon").get_duration(true).is_err());
    assert!(scalar("5 weeks").get_duration(true).is_err());
}

#[test]
fn float_words_are_not_bare_durations() {
    for text in ["NaN", "inf", "infinity", "-inf", "1e3"] {
        let err = scalar(text).get_duration(false).unwrap_err();
        assert!(
            matches!(err, HoconError::InvalidDuration(ref t) if t == text),
            "{text}: {err:?}"
        );
    }
    assert_eq!(
        scalar("NaN").get_duration(false).unwrap_err().to_string(),
        "Invalid duration format: NaN"
    );
}

#[test]
fn oversized_duration_is_out_of_range() {
    let err = scalar("99999999999999d").get_duration(true).unwrap_err();
    assert!(matches!(err, HoconError::DurationOutOfRange(ref t) if t == "99999999999999d"));
    assert!(matches!(
        scalar("99999999999999999999").get_duration(true),
        Err(HoconError::DurationOutOfRange(_))
    ));
    // 106751 days is just under the i64 nanosecond limit
    assert_eq!(
        scalar("106751d").get_duration(false).unwrap(),
        Duration::days(106_751)
    );
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn typed_lists_map_every_item() {
    assert_eq!(
        list(&["on", "false"]).get_bool_list().unwrap(),
        vec![true, false]
    );
    assert_eq!(list(&["1", "-2"]).get_i8_list().unwrap(), vec![1, -2]);
    assert_eq!(list(&["1", "2"]).get_i32_list().unwrap(), vec![1, 2]);
    assert_eq!(list(&["10000000000"]).get_i64_list().unwrap(), vec![10_000_000_000]);
    assert_eq!(list(&["0", "255"]).get_u8_list().unwrap(), vec![0, 255]);
    assert_eq!(list(&["1.5"]).get_f32_list().unwrap(), vec![1.5f32]);
    assert_eq!(list(&["1.5", "2"]).get_f64_list().unwrap(), vec![1.5, 2.0]);
    assert_eq!(
        list(&["1b", "2"]).get_byte_size_list().unwrap(),
        vec![1, 2]
    );
    assert_eq!(
        list(&["1s", "infinite"]).get_duration_list(true).unwrap(),
        vec![Duration::seconds(1), Duration::nanoseconds(-1)]
    );
    assert_eq!(list(&["a", "b c"]).get_string_list(), vec!["a", "b c"]);
}

#[test]
fn list_accessors_flatten_across_array_fragments() {
    let v: HoconValue = vec![
        HoconElement::Array(vec![scalar("1"), scalar("2")]),
        HoconElement::Array(vec![scalar("3")]),
    ]
    .into_iter()
    .collect();
    assert_eq!(v.get_i64_list().unwrap(), vec![1, 2, 3]);
}

#[test]
fn list_of_empty_or_absent_array_is_empty() {
    assert!(HoconValue::new().get_i32_list().unwrap().is_empty());
    assert!(scalar("x").get_bool_list().unwrap().is_empty());
    assert!(list(&[]).get_string_list().is_empty());
}

#[test]
fn one_bad_item_fails_the_whole_list() {
    assert!(list(&["1", "two", "3"]).get_i32_list().is_err());
    assert!(list(&["1s", "infinite"]).get_duration_list(false).is_err());
}
