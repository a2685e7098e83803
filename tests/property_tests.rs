//! Property-based tests for core domain logic.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;
use serde_json::json;

use oamctl::core::fieldpath::{validate, Paved};
use oamctl::core::template::{decode, ParameterKind};

/// Strategy for generating one path segment.
fn path_segment() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9'),
        ],
        1..10,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for generating valid dotted field paths.
fn field_path() -> impl Strategy<Value = String> {
    prop::collection::vec(path_segment(), 1..5).prop_map(|segments| segments.join("."))
}

proptest! {
    /// Any valid dotted path validates.
    #[test]
    fn generated_paths_validate(path in field_path()) {
        prop_assert!(validate(&path).is_ok());
    }

    /// Writing a string at any valid path reads back the same value.
    #[test]
    fn set_string_then_get_roundtrips(path in field_path(), value in ".*") {
        let mut paved = Paved::new(json!({}));
        paved.set_string(&path, &value).unwrap();
        prop_assert_eq!(paved.get(&path), Some(&json!(value)));
    }

    /// Writing a number at any valid path reads back the same value.
    #[test]
    fn set_number_then_get_roundtrips(path in field_path(), value in -1e12f64..1e12f64) {
        let mut paved = Paved::new(json!({}));
        paved.set_number(&path, value).unwrap();
        prop_assert_eq!(paved.get(&path), Some(&json!(value)));
    }

    /// A second write to the same path wins.
    #[test]
    fn last_write_wins(path in field_path(), first in ".*", second in ".*") {
        let mut paved = Paved::new(json!({}));
        paved.set_string(&path, &first).unwrap();
        paved.set_string(&path, &second).unwrap();
        prop_assert_eq!(paved.get(&path), Some(&json!(second)));
    }

    /// Unrecognized parameter types always degrade to string parameters;
    /// decoding never fails on the type field alone.
    #[test]
    fn unknown_parameter_types_degrade_to_string(kind in "[a-z]{1,12}") {
        let template = decode(Some(&json!({
            "object": {},
            "parameters": [
                { "name": "p", "type": kind.clone(), "default": "x" }
            ]
        })))
        .unwrap();
        let expected = if kind == "int" { ParameterKind::Int } else { ParameterKind::Str };
        prop_assert_eq!(template.parameters[0].kind, expected);
    }
}
