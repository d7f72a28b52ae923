//! Positional types: tuple structs, `#[meta(positional)]`, `array(..)` and unit structs.

use core::convert::Infallible;

use vc_meta::Meta;
use vc_meta::derive::Meta;
use vc_meta::info::Shape;
use vc_meta::kind::{TypeKind, is_positional, kind_of};
use vc_meta::table::LookupError;

#[derive(Meta)]
struct Rgba(u8, u8, u8, f32);

#[derive(Meta)]
#[meta(positional)]
struct Vector {
    x: f64,
    y: f64,
}

#[derive(Meta)]
#[meta(array(end, start))]
struct Range {
    start: u32,
    end: u32,
    #[allow(dead_code)]
    step: i8,
}

#[derive(Meta)]
struct Marker;

#[derive(Meta)]
struct Record(i32, String, i32, bool);

#[test]
fn tuple_struct() {
    assert!(is_positional::<Rgba>());
    assert_eq!(Rgba::SHAPE, Shape::Positional);
    assert!(Rgba::name_table().is_none());

    let info = Rgba::type_info().as_positional().unwrap();
    assert_eq!(info.field_len(), 4);
    assert!(info.fields().iter().all(|field| field.name().is_none()));
    assert_eq!(
        info.cases().iter().map(|c| c.ident()).collect::<Vec<_>>(),
        ["U8", "F32"]
    );

    let mut color = Rgba(10, 20, 30, 0.5);
    for index in 0..Rgba::FIELD_COUNT {
        match Rgba::ordinal_table().get_mut(&mut color, index).unwrap() {
            RgbaFieldMut::U8(channel) => *channel *= 2,
            RgbaFieldMut::F32(alpha) => *alpha = 1.0,
        }
    }
    assert_eq!((color.0, color.1, color.2, color.3), (20, 40, 60, 1.0));
}

#[test]
fn forced_positional() {
    assert_eq!(kind_of::<Vector>(), TypeKind::Positional);
    assert!(Vector::type_info().as_named().is_err());

    let vector = Vector { x: 1.5, y: -2.0 };
    let values: Vec<f64> = Vector::ordinal_table()
        .iter(&vector)
        .map(|field| match field {
            VectorFieldRef::F64(value) => *value,
        })
        .collect();
    assert_eq!(values, [1.5, -2.0]);
}

#[test]
fn explicit_array_declaration() {
    let range = Range {
        start: 3,
        end: 9,
        step: 1,
    };
    assert_eq!(Range::FIELD_COUNT, 2);

    // Declaration order, not struct order.
    let table = Range::ordinal_table();
    let RangeFieldRef::U32(first) = table.get(&range, 0).unwrap();
    assert_eq!(*first, 9);
    let RangeFieldRef::U32(second) = table.get(&range, 1).unwrap();
    assert_eq!(*second, 3);
    assert!(table.get(&range, 2).is_err());
}

#[test]
fn unit_struct() {
    assert_eq!(Marker::SHAPE, Shape::Positional);
    assert_eq!(Marker::FIELD_COUNT, 0);
    assert!(Marker::ACCESSORS.is_empty());
    assert!(Marker::type_info().cases().is_empty());

    let _: Option<<Marker as Meta>::Accessor> = None::<Infallible>;

    let table = Marker::ordinal_table();
    assert!(table.is_empty());
    assert!(matches!(
        table.get(&Marker, 0),
        Err(LookupError::IndexOutOfRange { index: 0, len: 0, .. })
    ));
}

#[test]
fn ordinal_points_at_the_field() {
    let mut record = Record(1, "r".into(), 3, true);
    let table = Record::ordinal_table();
    assert_eq!(table.len(), 4);
    assert_eq!(Record::type_info().cases().len(), 3);

    let expected: *const i32 = &record.2;
    let RecordFieldMut::I32(third) = table.get_mut(&mut record, 2).unwrap() else {
        panic!("ordinal 2 is an `i32`");
    };
    assert!(core::ptr::eq(&*third, expected));
    *third = 30;
    assert_eq!(record.2, 30);

    let text: *const String = &record.1;
    let RecordFieldRef::String(second) = table.get(&record, 1).unwrap() else {
        panic!("ordinal 1 is a `String`");
    };
    assert!(core::ptr::eq(second, text));

    let err = table.get_mut(&mut record, 4).unwrap_err();
    assert!(matches!(err, LookupError::IndexOutOfRange { index: 4, len: 4, .. }));
}

#[test]
fn field_iterator_outlives_the_table() {
    let record = Record(5, "s".into(), 6, false);
    let fields = Record::ordinal_table().iter(&record);
    assert_eq!(fields.len(), 4);

    let ints: Vec<i32> = fields
        .filter_map(|field| match field {
            RecordFieldRef::I32(value) => Some(*value),
            _ => None,
        })
        .collect();
    assert_eq!(ints, [5, 6]);
}
