//! A small JSON codec written once against the tables, for any `Meta` type.

use serde_json::{Map, Value, json};
use vc_meta::Meta;
use vc_meta::derive::Meta;
use vc_meta::info::Shape;

// -----------------------------------------------------------------------------
// Codec

trait Encode {
    fn encode(&self) -> Value;
}

trait Decode {
    fn decode(self, json: &Value) -> Result<(), String>;
}

impl Encode for u32 {
    fn encode(&self) -> Value {
        json!(self)
    }
}

impl Encode for String {
    fn encode(&self) -> Value {
        json!(self)
    }
}

impl Encode for Vec<u32> {
    fn encode(&self) -> Value {
        json!(self)
    }
}

fn encode<T>(value: &T) -> Value
where
    T: Meta,
    for<'a> T::FieldRef<'a>: Encode,
{
    let fields = T::ordinal_table().iter(value).map(|field| field.encode());
    match T::SHAPE {
        Shape::Named => {
            let names = T::type_info().fields().iter().filter_map(|f| f.name());
            Value::Object(names.map(String::from).zip(fields).collect())
        }
        Shape::Positional => Value::Array(fields.collect()),
    }
}

fn decode<T>(value: &mut T, json: &Value) -> Result<(), String>
where
    T: Meta,
    for<'a> T::FieldMut<'a>: Decode,
{
    match (T::name_table(), json) {
        (Some(table), Value::Object(map)) => {
            for (name, item) in map {
                table
                    .field_mut(value, name)
                    .map_err(|err| err.to_string())?
                    .decode(item)?;
            }
            Ok(())
        }
        (None, Value::Array(items)) => {
            let table = T::ordinal_table();
            for (index, item) in items.iter().enumerate() {
                table
                    .get_mut(value, index)
                    .map_err(|err| err.to_string())?
                    .decode(item)?;
            }
            Ok(())
        }
        _ => Err(format!("unexpected json for `{}`", T::type_info().ident())),
    }
}

fn as_u32(json: &Value) -> Result<u32, String> {
    json.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| format!("expected u32, found {json}"))
}

// -----------------------------------------------------------------------------
// Types

#[derive(Meta, Debug, PartialEq, Default)]
struct Order {
    id: u32,
    customer: String,
    items: Vec<u32>,
    quantity: u32,
}

#[derive(Meta, Debug, PartialEq, Default)]
struct Version(u32, u32, u32);

impl Encode for OrderFieldRef<'_> {
    fn encode(&self) -> Value {
        match self {
            Self::U32(value) => value.encode(),
            Self::String(value) => value.encode(),
            Self::VecU32(value) => value.encode(),
        }
    }
}

impl Decode for OrderFieldMut<'_> {
    fn decode(self, json: &Value) -> Result<(), String> {
        match self {
            Self::U32(value) => *value = as_u32(json)?,
            Self::String(value) => {
                *value = json.as_str().ok_or("expected a string")?.to_owned();
            }
            Self::VecU32(value) => {
                let items = json.as_array().ok_or("expected an array")?;
                *value = items.iter().map(as_u32).collect::<Result<_, _>>()?;
            }
        }
        Ok(())
    }
}

impl Encode for VersionFieldRef<'_> {
    fn encode(&self) -> Value {
        let Self::U32(value) = self;
        value.encode()
    }
}

impl Decode for VersionFieldMut<'_> {
    fn decode(self, json: &Value) -> Result<(), String> {
        let Self::U32(value) = self;
        *value = as_u32(json)?;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[test]
fn named_round_trip() {
    let order = Order {
        id: 3,
        customer: "bo".into(),
        items: vec![10, 11],
        quantity: 2,
    };

    let json = encode(&order);
    assert_eq!(
        json,
        json!({ "id": 3, "customer": "bo", "items": [10, 11], "quantity": 2 })
    );

    let mut decoded = Order::default();
    decode(&mut decoded, &json).unwrap();
    assert_eq!(decoded, order);
}

#[test]
fn positional_round_trip() {
    let version = Version(1, 4, 2);
    let json = encode(&version);
    assert_eq!(json, json!([1, 4, 2]));

    let mut decoded = Version::default();
    decode(&mut decoded, &json).unwrap();
    assert_eq!(decoded, version);
}

#[test]
fn decode_errors() {
    let mut order = Order::default();

    let err = decode(&mut order, &json!({ "total": 1 })).unwrap_err();
    assert!(err.ends_with("has no field named `total`"), "{err}");

    let mut version = Version::default();
    let err = decode(&mut version, &json!([1, 2, 3, 4])).unwrap_err();
    assert!(err.contains("field index 3 is out of range"), "{err}");

    let err = decode(&mut version, &Map::new().into()).unwrap_err();
    assert_eq!(err, "unexpected json for `Version`");
}
