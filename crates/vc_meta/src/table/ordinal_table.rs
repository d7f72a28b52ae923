use core::fmt;

use crate::Meta;
use crate::meta::{FieldMutFn, FieldRefFn};
use crate::table::LookupError;

/// Ordinal to field dispatch, for every `Meta` type.
///
/// Entry `i` is a function pointer specialized to field `i` at compile time.
/// A lookup is one bounds check, one index and one indirect call.
///
/// # Examples
///
/// ```
/// use vc_meta::{Meta, derive::Meta};
///
/// #[derive(Meta)]
/// struct Span(usize, usize);
///
/// let table = Span::ordinal_table();
/// let mut span = Span(2, 5);
///
/// let SpanFieldMut::Usize(end) = table.get_mut(&mut span, 1).unwrap();
/// *end += 1;
///
/// assert_eq!(span.1, 6);
/// assert_eq!(table.len(), 2);
/// assert!(table.get(&span, 2).is_err());
/// ```
pub struct OrdinalTable<T: Meta> {
    fields_ref: &'static [FieldRefFn<T>],
    fields_mut: &'static [FieldMutFn<T>],
}

impl<T: Meta> OrdinalTable<T> {
    /// The table of `T`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            fields_ref: T::FIELDS_REF,
            fields_mut: T::FIELDS_MUT,
        }
    }

    /// The declared number of fields.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.fields_mut.len()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.fields_mut.is_empty()
    }

    /// A shared reference to the field at ordinal `index` of `value`.
    ///
    /// # Errors
    ///
    /// [`LookupError::IndexOutOfRange`] if `index >= self.len()`.
    #[inline]
    pub fn get<'a>(&self, value: &'a T, index: usize) -> Result<T::FieldRef<'a>, LookupError> {
        match self.fields_ref.get(index) {
            Some(field) => Ok(field(value)),
            None => Err(self.out_of_range(index)),
        }
    }

    /// A mutable reference to the field at ordinal `index` of `value`.
    ///
    /// # Errors
    ///
    /// [`LookupError::IndexOutOfRange`] if `index >= self.len()`.
    #[inline]
    pub fn get_mut<'a>(
        &self,
        value: &'a mut T,
        index: usize,
    ) -> Result<T::FieldMut<'a>, LookupError> {
        match self.fields_mut.get(index) {
            Some(field) => Ok(field(value)),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Shared references to every field of `value`, in ordinal order.
    pub fn iter<'a>(
        &self,
        value: &'a T,
    ) -> impl ExactSizeIterator<Item = T::FieldRef<'a>> + use<'a, T> {
        self.fields_ref.iter().map(move |field| field(value))
    }

    #[cold]
    fn out_of_range(&self, index: usize) -> LookupError {
        LookupError::IndexOutOfRange {
            type_path: core::any::type_name::<T>(),
            index,
            len: self.len(),
        }
    }
}

impl<T: Meta> Default for OrdinalTable<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Meta> Clone for OrdinalTable<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Meta> Copy for OrdinalTable<T> {}

impl<T: Meta> fmt::Debug for OrdinalTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrdinalTable")
            .field("type", &core::any::type_name::<T>())
            .field("len", &self.len())
            .finish()
    }
}
