use core::fmt::Debug;

use crate::info::{Shape, TypeInfo};
use crate::kind::Classify;
use crate::table::{NameTable, OrdinalTable};

/// An entry of [`Meta::FIELDS_REF`].
pub type FieldRefFn<T> = for<'a> fn(&'a T) -> <T as Meta>::FieldRef<'a>;

/// An entry of [`Meta::FIELDS_MUT`].
pub type FieldMutFn<T> = for<'a> fn(&'a mut T) -> <T as Meta>::FieldMut<'a>;

/// A type with a declared, ordered list of fields.
///
/// Implemented with `#[derive(Meta)]`, which also emits three enums next to
/// the type, one case per distinct field type:
///
/// - `{T}Accessor`: describes a field, see [`Accessor`](crate::table::Accessor).
/// - `{T}FieldRef<'a>`: a shared reference into a live value.
/// - `{T}FieldMut<'a>`: a mutable reference into a live value.
///
/// Types without fields use [`Infallible`](core::convert::Infallible) instead.
///
/// Every table is a constant and `type_info` is built once, so a codec can
/// walk any `Meta` type without per-type code and without allocating.
///
/// # Examples
///
/// ```
/// use vc_meta::{Meta, derive::Meta};
///
/// #[derive(Meta)]
/// struct Sample {
///     id: u32,
///     tag: String,
///     weight: u32,
/// }
///
/// // `id` and `weight` share the `U32` case.
/// let mut sample = Sample { id: 1, tag: "a".into(), weight: 7 };
/// for field in Sample::FIELDS_MUT {
///     match field(&mut sample) {
///         SampleFieldMut::U32(value) => *value *= 10,
///         SampleFieldMut::String(value) => value.push('!'),
///     }
/// }
///
/// assert_eq!((sample.id, sample.tag.as_str(), sample.weight), (10, "a!", 70));
/// assert_eq!(Sample::FIELD_COUNT, 3);
/// assert_eq!(Sample::type_info().cases().len(), 2);
/// ```
///
/// A declaration mixing names and bare accessors is rejected:
///
/// ```compile_fail
/// use vc_meta::derive::Meta;
///
/// #[derive(Meta)]
/// #[meta(object(x, "y", y))]
/// struct Mixed { x: u8, y: u8 }
/// ```
pub trait Meta: Classify + Sized + 'static {
    /// Whether fields are reached by name or by ordinal only.
    const SHAPE: Shape;

    /// Number of declared fields.
    const FIELD_COUNT: usize;

    /// The generated `{T}Accessor` enum.
    type Accessor: Copy + Debug + 'static;

    /// The generated `{T}FieldRef<'a>` enum.
    type FieldRef<'a>
    where
        Self: 'a;

    /// The generated `{T}FieldMut<'a>` enum.
    type FieldMut<'a>
    where
        Self: 'a;

    /// One accessor per field, indexed by ordinal.
    const ACCESSORS: &'static [Self::Accessor];

    /// One shared projection per field, indexed by ordinal.
    const FIELDS_REF: &'static [FieldRefFn<Self>];

    /// One mutable projection per field, indexed by ordinal.
    const FIELDS_MUT: &'static [FieldMutFn<Self>];

    /// Returns the type information, built on first call.
    fn type_info() -> &'static TypeInfo;

    /// The name table, `None` for positional types.
    #[inline]
    fn name_table() -> Option<NameTable<Self>> {
        NameTable::new()
    }

    /// The ordinal table.
    #[inline(always)]
    fn ordinal_table() -> OrdinalTable<Self> {
        OrdinalTable::new()
    }
}
