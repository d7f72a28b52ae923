use alloc::boxed::Box;

use vc_utils::hash::HashMap;

use crate::info::{FieldDescriptor, Type, VariantCase};
use crate::info::{impl_docs_fn, impl_fields_fn};
use crate::kind::Classify;

/// Type information of a type whose fields are reached by name.
///
/// Besides the ordered descriptors it holds a name index, built once with
/// the fixed hash state, so [`index_of`](NamedInfo::index_of) is O(1).
///
/// # Examples
///
/// ```
/// use vc_meta::{Meta, derive::Meta};
///
/// #[derive(Meta)]
/// struct Account {
///     id: u64,
///     owner: String,
/// }
///
/// let info = Account::type_info().as_named().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("owner"), Some(1));
/// assert_eq!(info.field("id").unwrap().index(), 0);
/// assert!(info.field("balance").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct NamedInfo {
    ty: Type,
    ident: &'static str,
    fields: Box<[FieldDescriptor]>,
    cases: Box<[VariantCase]>,
    index: HashMap<&'static str, usize>,
    docs: Option<&'static str>,
}

impl NamedInfo {
    impl_docs_fn!(docs);
    impl_fields_fn!();

    /// Creates a new [`NamedInfo`].
    ///
    /// The order of fields is the input order. Fields without a name are
    /// left out of the name index.
    pub fn new<T: Classify + 'static>(
        ident: &'static str,
        fields: &[FieldDescriptor],
        cases: &[VariantCase],
    ) -> Self {
        let index = fields
            .iter()
            .filter_map(|field| Some((field.name()?, field.index())))
            .collect();

        Self {
            ty: Type::of::<T>(),
            ident,
            fields: fields.into(),
            cases: cases.into(),
            index,
            docs: None,
        }
    }

    /// Returns the ordinal of the field called `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the descriptor of the field called `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(self.index_of(name)?)
    }

    /// Returns the field names in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name().unwrap_or_default())
    }
}
