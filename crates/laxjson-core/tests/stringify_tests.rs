use laxjson_core::{parse_str, stringify, JsonMap, JsonValue};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn stringify_null_and_bools() {
    assert_eq!(stringify(&JsonValue::Null), "null");
    assert_eq!(stringify(&JsonValue::Bool(true)), "true");
    assert_eq!(stringify(&JsonValue::Bool(false)), "false");
}

#[test]
fn stringify_ints() {
    assert_eq!(stringify(&JsonValue::Int(0)), "0");
    assert_eq!(stringify(&JsonValue::Int(-42)), "-42");
    assert_eq!(
        stringify(&JsonValue::Int(i64::MAX)),
        "9223372036854775807"
    );
}

#[test]
fn whole_doubles_keep_their_point() {
    assert_eq!(stringify(&JsonValue::Double(3.0)), "3.0");
    assert_eq!(stringify(&JsonValue::Double(0.0)), "0.0");
    assert_eq!(stringify(&JsonValue::Double(-2.0)), "-2.0");
    assert_eq!(stringify(&JsonValue::Double(1000.0)), "1000.0");
}

#[test]
fn fractional_doubles_print_shortest_form() {
    assert_eq!(stringify(&JsonValue::Double(3.14)), "3.14");
    assert_eq!(stringify(&JsonValue::Double(-2.5)), "-2.5");
    assert_eq!(stringify(&JsonValue::Double(0.1)), "0.1");
}

#[test]
fn extreme_magnitudes_match_the_serde_writer() {
    for v in [1e300, -1e300, 1e16, 5e-324] {
        let expected = serde_json::to_string(&v).unwrap();
        assert_eq!(stringify(&JsonValue::Double(v)), expected);
    }
    // Exponent notation, not a 300-digit decimal expansion.
    assert!(stringify(&JsonValue::Double(1e300)).len() <= 8);
    // The fixed-point rule still owns everything below 1e16.
    assert_eq!(stringify(&JsonValue::Double(1e15)), "1000000000000000.0");
    assert_eq!(
        stringify(&JsonValue::Double(9007199254740992.0)),
        "9007199254740992.0"
    );
}

#[test]
fn non_finite_doubles_emit_null() {
    assert_eq!(stringify(&JsonValue::Double(f64::NAN)), "null");
    assert_eq!(stringify(&JsonValue::Double(f64::INFINITY)), "null");
    assert_eq!(stringify(&JsonValue::Double(f64::NEG_INFINITY)), "null");
    assert_eq!(
        stringify(&JsonValue::Array(vec![JsonValue::Double(f64::NAN)])),
        "[null]"
    );
}

// ============================================================================
// Strings and Escapes
// ============================================================================

#[test]
fn plain_strings_are_quoted() {
    assert_eq!(stringify(&JsonValue::from("hello")), r#""hello""#);
    assert_eq!(stringify(&JsonValue::from("")), r#""""#);
}

#[test]
fn quotes_and_backslashes_are_escaped() {
    assert_eq!(
        stringify(&JsonValue::from(r#"say "hi""#)),
        r#""say \"hi\"""#
    );
    assert_eq!(
        stringify(&JsonValue::from(r"path\to\file")),
        r#""path\\to\\file""#
    );
}

#[test]
fn whitespace_controls_use_short_escapes() {
    assert_eq!(
        stringify(&JsonValue::from("line1\nline2\tend\r")),
        r#""line1\nline2\tend\r""#
    );
    assert_eq!(
        stringify(&JsonValue::from("\u{08}\u{0c}")),
        r#""\b\f""#
    );
}

#[test]
fn other_controls_use_unicode_escapes() {
    assert_eq!(stringify(&JsonValue::from("\u{01}")), r#""\u0001""#);
    assert_eq!(stringify(&JsonValue::from("a\u{1f}b")), r#""a\u001fb""#);
}

#[test]
fn unicode_passes_through_unescaped() {
    assert_eq!(stringify(&JsonValue::from("café")), "\"café\"");
    assert_eq!(stringify(&JsonValue::from("你好")), "\"你好\"");
}

#[test]
fn object_keys_are_escaped_too() {
    let map = JsonMap::from(vec![(r#"we"ird"#, 1)]);
    assert_eq!(stringify(&JsonValue::from(map)), r#"{"we\"ird":1}"#);
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn empty_containers() {
    assert_eq!(stringify(&JsonValue::Array(vec![])), "[]");
    assert_eq!(stringify(&JsonValue::Object(JsonMap::new())), "{}");
}

#[test]
fn arrays_join_with_commas() {
    let v = JsonValue::Array(vec![
        JsonValue::Int(1),
        JsonValue::from("x"),
        JsonValue::Bool(true),
        JsonValue::Null,
    ]);
    assert_eq!(stringify(&v), r#"[1,"x",true,null]"#);
}

#[test]
fn objects_emit_keys_in_insertion_order() {
    let mut map = JsonMap::new();
    map.insert("zebra", 1);
    map.insert("alpha", 2);
    assert_eq!(
        stringify(&JsonValue::from(map)),
        r#"{"zebra":1,"alpha":2}"#
    );
}

#[test]
fn nested_containers() {
    let doc = parse_str(r#"{"a":{"b":[1,"x",true]}}"#);
    assert_eq!(doc.to_json(), r#"{"a":{"b":[1,"x",true]}}"#);
}

// ============================================================================
// Method and Display Forms
// ============================================================================

#[test]
fn to_json_matches_stringify() {
    let doc = parse_str(r#"{"n":1,"s":"x"}"#);
    assert_eq!(doc.to_json(), stringify(&doc));
}

#[test]
fn display_matches_stringify() {
    let doc = parse_str(r#"[1,2.5,"three"]"#);
    assert_eq!(format!("{doc}"), stringify(&doc));
}

// ============================================================================
// Text Round Trips
// ============================================================================

#[test]
fn compact_output_reparses_to_the_same_tree() {
    let doc = parse_str(
        r#"{"name":"Ada \"the first\"","count":3,"ratio":2.0,"pi":3.14,"ok":true,"gone":null,"tags":["a","b"],"nested":{"grid":[[1],[2]]}}"#,
    );
    assert!(!doc.is_null());
    let text = doc.to_json();
    assert_eq!(parse_str(&text), doc);
}

#[test]
fn stringify_is_a_fixpoint() {
    let doc = parse_str(r#"{ "a" : [ 1 , 2.5 ] , "b" : "x" }"#);
    let first = doc.to_json();
    let second = parse_str(&first).to_json();
    assert_eq!(first, second);
}

#[test]
fn int_double_distinction_survives_reparse() {
    let doc = parse_str(r#"{"i":3,"d":3.0}"#);
    let reparsed = parse_str(&doc.to_json());
    assert!(reparsed["i"].is_int());
    assert!(reparsed["d"].is_double());
    assert_eq!(reparsed["i"], JsonValue::Int(3));
    assert_eq!(reparsed["d"], JsonValue::Double(3.0));
}

#[test]
fn huge_doubles_stay_doubles_through_reparse() {
    let doc = JsonValue::Array(vec![
        JsonValue::Double(1e300),
        JsonValue::Double(1e16),
    ]);
    let reparsed = parse_str(&doc.to_json());
    assert!(reparsed[0].is_double());
    assert!(reparsed[1].is_double());
    assert_eq!(reparsed[0].double_value(), 1e300);
    assert_eq!(reparsed[1].double_value(), 1e16);
}

#[test]
fn extreme_ints_survive_reparse() {
    let doc = parse_str(r#"[9223372036854775807,-9223372036854775808]"#);
    let reparsed = parse_str(&doc.to_json());
    assert_eq!(reparsed[0], JsonValue::Int(i64::MAX));
    assert_eq!(reparsed[1], JsonValue::Int(i64::MIN));
}

#[test]
fn escaped_strings_survive_reparse() {
    let source = JsonValue::Array(vec![
        JsonValue::from("line1\nline2"),
        JsonValue::from("tab\there"),
        JsonValue::from(r#"say "hi""#),
        JsonValue::from("\u{01}control"),
    ]);
    let reparsed = parse_str(&source.to_json());
    assert_eq!(reparsed, source);
}
