//! Type information serializes for tooling.

use serde_json::json;
use vc_meta::Meta;
use vc_meta::derive::Meta;

/// A 2D point.
#[derive(Meta)]
struct Point {
    /// Horizontal.
    x: i32,
    y: i32,
}

#[derive(Meta)]
struct Pair(Option<String>, (u8, char));

#[test]
fn named_info_as_json() {
    let value = serde_json::to_value(Point::type_info()).unwrap();

    assert_eq!(value["ident"], "Point");
    assert_eq!(value["shape"], "Named");
    assert_eq!(value["docs"], "A 2D point.");
    assert_eq!(
        value["fields"][0],
        json!({
            "index": 0,
            "name": "x",
            "type": { "path": "i32", "kind": "Integer" },
            "case": 0,
            "docs": "Horizontal.",
        })
    );
    assert_eq!(value["fields"][1]["docs"], serde_json::Value::Null);
    assert_eq!(value["cases"], json!([{
        "ident": "I32",
        "type": { "path": "i32", "kind": "Integer" },
        "ordinals": [0, 1],
    }]));
}

#[test]
fn positional_info_as_json() {
    let value = serde_json::to_value(Pair::type_info()).unwrap();

    assert_eq!(value["shape"], "Positional");
    assert_eq!(value["fields"][0]["name"], serde_json::Value::Null);
    assert_eq!(value["fields"][0]["type"]["kind"], "Nullable");
    assert_eq!(value["fields"][1]["type"]["kind"], "Pair");
    assert_eq!(value["cases"][1]["ident"], "TupleU8Char");
}

#[test]
fn kinds_use_variant_names() {
    use vc_meta::info::Shape;
    use vc_meta::kind::TypeKind;

    assert_eq!(serde_json::to_value(TypeKind::Integer).unwrap(), "Integer");
    assert_eq!(serde_json::to_value(TypeKind::None).unwrap(), "None");
    assert_eq!(serde_json::to_value(Shape::Positional).unwrap(), "Positional");
    assert_eq!(TypeKind::Integer.as_str(), "integer");
}
