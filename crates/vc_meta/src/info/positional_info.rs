use alloc::boxed::Box;

use crate::info::{FieldDescriptor, Type, VariantCase};
use crate::info::{impl_docs_fn, impl_fields_fn};
use crate::kind::Classify;

/// Type information of a type whose fields are reached by ordinal only.
///
/// # Examples
///
/// ```
/// use vc_meta::{Meta, derive::Meta};
///
/// #[derive(Meta)]
/// struct Rgb(u8, u8, u8);
///
/// let info = Rgb::type_info().as_positional().unwrap();
///
/// assert_eq!(info.field_len(), 3);
/// assert_eq!(info.cases().len(), 1);
/// assert!(info.field_at(2).unwrap().name().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PositionalInfo {
    ty: Type,
    ident: &'static str,
    fields: Box<[FieldDescriptor]>,
    cases: Box<[VariantCase]>,
    docs: Option<&'static str>,
}

impl PositionalInfo {
    impl_docs_fn!(docs);
    impl_fields_fn!();

    /// Creates a new [`PositionalInfo`].
    ///
    /// The order of fields is the input order.
    pub fn new<T: Classify + 'static>(
        ident: &'static str,
        fields: &[FieldDescriptor],
        cases: &[VariantCase],
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            ident,
            fields: fields.into(),
            cases: cases.into(),
            docs: None,
        }
    }
}
