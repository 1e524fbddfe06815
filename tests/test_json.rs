use registrar::json::{JsonError, JsonValue, parse, parse_lenient, stringify};

#[test]
fn test_array_growth_preserves_order() {
    // Fresh arrays start with capacity 10; pushing 11 must grow cleanly.
    let mut arr = JsonValue::array();
    for i in 0..11 {
        arr.push(JsonValue::Number(i as f64)).unwrap();
    }

    assert_eq!(arr.len(), 11);
    for i in 0..11 {
        assert_eq!(arr.get_index(i).and_then(|v| v.as_f64()), Some(i as f64));
    }
}

#[test]
fn test_object_set_replaces_single_entry() {
    let mut obj = JsonValue::object();
    obj.set("k", JsonValue::from("A")).unwrap();
    obj.set("k", JsonValue::from("B")).unwrap();

    assert_eq!(obj.len(), 1);
    assert_eq!(obj.get("k").and_then(|v| v.as_str()), Some("B"));
}

#[test]
fn test_object_remove_deletes_entry() {
    let mut obj = JsonValue::object();
    obj.set("k", JsonValue::from(1.0)).unwrap();

    let removed = obj.remove("k").unwrap();
    assert_eq!(removed, Some(JsonValue::Number(1.0)));
    assert_eq!(obj.len(), 0);

    // Removing an absent key is a no-op, not an error
    assert_eq!(obj.remove("k").unwrap(), None);
}

#[test]
fn test_type_mismatches_are_explicit_errors() {
    let mut arr = JsonValue::array();
    assert_eq!(arr.set("k", JsonValue::Null), Err(JsonError::NotAnObject));

    let mut obj = JsonValue::object();
    assert_eq!(obj.push(JsonValue::Null), Err(JsonError::NotAnArray));

    assert_eq!(obj.pop(), None);
    assert_eq!(obj.get_index(0), None);
    assert_eq!(arr.get("k"), None);
}

#[test]
fn test_get_index_is_bounds_checked() {
    let mut arr = JsonValue::array();
    arr.push(JsonValue::from(true)).unwrap();

    assert!(arr.get_index(0).is_some());
    assert!(arr.get_index(1).is_none());
}

#[test]
fn test_pop_returns_ownership_in_reverse_order() {
    let mut arr = JsonValue::array();
    arr.push(JsonValue::from("a")).unwrap();
    arr.push(JsonValue::from("b")).unwrap();

    assert_eq!(arr.pop().and_then(|v| v.as_str().map(String::from)), Some("b".to_string()));
    assert_eq!(arr.pop().and_then(|v| v.as_str().map(String::from)), Some("a".to_string()));
    assert_eq!(arr.pop(), None);
}

#[test]
fn test_drop_of_unpopulated_containers() {
    // Empty backing storage is a valid state; releasing it must not crash.
    drop(JsonValue::object());
    drop(JsonValue::array());
}

#[test]
fn test_parse_literals_and_numbers() {
    assert_eq!(parse("true").unwrap(), JsonValue::Boolean(true));
    assert_eq!(parse("false").unwrap(), JsonValue::Boolean(false));
    assert_eq!(parse("null").unwrap(), JsonValue::Null);
    assert_eq!(parse("42").unwrap(), JsonValue::Number(42.0));
    assert_eq!(parse("-3.5").unwrap(), JsonValue::Number(-3.5));
    assert_eq!(parse("1e2").unwrap(), JsonValue::Number(100.0));
}

#[test]
fn test_parse_skips_whitespace_between_tokens() {
    let doc = parse(" { \"a\" :\t[ 1 ,\n2 ] } ").unwrap();

    let a = doc.get("a").unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(a.get_index(1).and_then(|v| v.as_f64()), Some(2.0));
}

#[test]
fn test_parse_string_escapes() {
    let v = parse(r#""a\"b\\c\/d\ne\tf\rg\bh\fi""#).unwrap();
    assert_eq!(
        v.as_str(),
        Some("a\"b\\c/d\ne\tf\rg\u{0008}h\u{000c}i")
    );
}

#[test]
fn test_parse_unrecognized_escape_passes_through() {
    // "\x" is not a JSON escape; the escaped character survives literally.
    let v = parse(r#""a\xb""#).unwrap();
    assert_eq!(v.as_str(), Some("axb"));
}

#[test]
fn test_parse_object_key_order_is_insertion_order() {
    let doc = parse(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    assert_eq!(stringify(&doc, false), r#"{"z":1.000000,"a":2.000000,"m":3.000000}"#);
}

#[test]
fn test_parse_malformed_input_is_a_structured_error() {
    assert!(parse("{").is_err());
    assert!(parse("[1,").is_err());
    assert!(parse(r#"{"a" 1}"#).is_err());
    assert!(parse("@").is_err());
    assert!(parse("").is_err());
}

#[test]
fn test_parse_lenient_collapses_errors_to_null() {
    // The historical wire policy: malformed input and literal null are
    // indistinguishable through the lenient entry point.
    assert!(parse_lenient("{").is_null());
    assert!(parse_lenient("null").is_null());
    assert!(!parse_lenient("{}").is_null());
}

#[test]
fn test_parse_ignores_trailing_text() {
    assert_eq!(parse("true trailing").unwrap(), JsonValue::Boolean(true));
}

#[test]
fn test_stringify_numbers_fixed_six_decimals() {
    assert_eq!(stringify(&JsonValue::Number(0.0), false), "0.000000");
    assert_eq!(stringify(&JsonValue::Number(-1.25), false), "-1.250000");
}

#[test]
fn test_stringify_escapes_control_characters() {
    let v = JsonValue::from("a\u{0001}b");
    assert_eq!(stringify(&v, false), "\"a\\u0001b\"");
}

#[test]
fn test_stringify_pretty_output() {
    let mut obj = JsonValue::object();
    let mut arr = JsonValue::array();
    arr.push(JsonValue::from(1.0)).unwrap();
    obj.set("rows", arr).unwrap();

    let pretty = stringify(&obj, true);
    assert_eq!(pretty, "{\n  \"rows\": [\n    1.000000\n  ]\n}");

    // Compact form stays whitespace-free
    assert_eq!(stringify(&obj, false), r#"{"rows":[1.000000]}"#);
}

#[test]
fn test_round_trip_preserves_shape_and_values() {
    let mut inner = JsonValue::object();
    inner.set("name", JsonValue::from("intro to systems")).unwrap();
    inner.set("credits", JsonValue::from(3.5)).unwrap();
    inner.set("open", JsonValue::from(true)).unwrap();
    inner.set("notes", JsonValue::Null).unwrap();

    let mut root = JsonValue::array();
    root.push(inner).unwrap();
    root.push(JsonValue::from(-2.25)).unwrap();

    // Numbers chosen to survive the six-decimal truncation exactly.
    let text = stringify(&root, false);
    let reparsed = parse(&text).unwrap();

    assert_eq!(reparsed, root);
}
