//! Tests for Rectangle and JSON revival into shapes.

use serde::{Deserialize, Serialize};
use shape::{Rectangle, Revive, ShapeError, deserialize, serialize};

/// A shape with behaviour beyond its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Only the fields a consumer cares about.
#[derive(Debug, Deserialize)]
struct Width {
    width: f64,
}

// ============================================================================
// RECTANGLE
// ============================================================================

#[test]
fn test_rectangle_fields_and_area() {
    let rect = Rectangle::new(10, 20);
    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.height, 20.0);
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn test_rectangle_fractional_sides() {
    let rect = Rectangle::new(2.5, 4.0);
    assert_eq!(rect.area(), 10.0);
}

// ============================================================================
// SERIALIZE
// ============================================================================

#[test]
fn test_serialize_rectangle() {
    let json = serialize(&Rectangle::new(3, 4)).unwrap();
    assert_eq!(json, r#"{"width":3.0,"height":4.0}"#);
}

#[test]
fn test_serialize_arbitrary_value() {
    let value = serde_json::json!({ "tags": ["a", "b"], "count": 2 });
    let json = serialize(&value).unwrap();
    let back: serde_json::Value = deserialize(&json).unwrap();
    assert_eq!(back, value);
}

// ============================================================================
// DESERIALIZE WITH SHAPE
// ============================================================================

#[test]
fn test_round_trip_keeps_fields_and_behaviour() {
    let person = Person {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    };

    let revived: Person = deserialize(&serialize(&person).unwrap()).unwrap();
    assert_eq!(revived, person);
    assert_eq!(revived.full_name(), person.full_name());
}

#[test]
fn test_revive_rectangle() {
    let json = serialize(&Rectangle::new(10, 20)).unwrap();
    let rect = Rectangle::revive(&json).unwrap();
    assert_eq!(rect, Rectangle::new(10, 20));
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn test_revive_from_handwritten_json() {
    let rect = Rectangle::revive(r#"{ "height": 2, "width": 7 }"#).unwrap();
    assert_eq!(rect.area(), 14.0);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = serialize(&Rectangle::new(6, 1)).unwrap();
    let narrow: Width = deserialize(&json).unwrap();
    assert_eq!(narrow.width, 6.0);
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_malformed_json_propagates_decoder_error() {
    let err = Rectangle::revive("{ width: 1").unwrap_err();
    let ShapeError::Json(inner) = &err;
    assert!(inner.is_syntax() || inner.is_eof());
    assert_eq!(err.to_string(), inner.to_string());
}

#[test]
fn test_missing_field_is_a_data_error() {
    let err = deserialize::<Rectangle>(r#"{"width":1}"#).unwrap_err();
    let ShapeError::Json(inner) = err;
    assert!(inner.is_data());
    assert!(inner.to_string().contains("height"));
}
