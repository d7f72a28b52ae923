//! Static storage for [`TypeInfo`].
//!
//! `Meta::type_info` keeps its result in a `static CELL` inside the function.
//!
//! - [`NonGenericInfoCell`]: one `OnceLock`, for types without generics.
//! - [`GenericInfoCell`]: the `static` is shared by every instantiation of a
//!   generic type, so it holds a [`TypeIdMap`] behind a [`RwLock`].
//!
//! Both leak their contents, the returned references are `'static`.

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use alloc::boxed::Box;
use vc_utils::TypeIdMap;

use crate::info::TypeInfo;

#[inline(never)]
fn build(f: impl FnOnce() -> TypeInfo) -> TypeInfo {
    let info = f();
    log::trace!("built type info of `{}`", info.type_path());
    #[cfg(all(debug_assertions, feature = "debug"))]
    crate::info::validate(&info);
    info
}

// -----------------------------------------------------------------------------
// NonGenericInfoCell

/// Static storage of the [`TypeInfo`] of a non-generic type.
///
/// # Examples
///
/// ```
/// use vc_meta::impls::NonGenericInfoCell;
/// use vc_meta::info::{FieldDescriptor, PositionalInfo, TypeInfo, VariantCase};
///
/// struct Meters(f64);
/// # impl vc_meta::kind::Classify for Meters {
/// #     const KIND: vc_meta::kind::TypeKind = vc_meta::kind::TypeKind::Positional;
/// # }
///
/// fn meters_info() -> &'static TypeInfo {
///     static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
///     CELL.get_or_init(|| {
///         TypeInfo::Positional(PositionalInfo::new::<Meters>(
///             "Meters",
///             &[FieldDescriptor::positional::<f64>(0)],
///             &[VariantCase::new::<f64>("F64", &[0])],
///         ))
///     })
/// }
///
/// assert!(core::ptr::eq(meters_info(), meters_info()));
/// assert_eq!(meters_info().ident(), "Meters");
/// ```
pub struct NonGenericInfoCell(OnceLock<TypeInfo>);

impl NonGenericInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(|| build(f))
    }
}

impl Default for NonGenericInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// GenericInfoCell

/// Static storage of the [`TypeInfo`] of every instantiation of a generic type.
///
/// Lookups take the read lock. Only the first call per instantiation takes
/// the write lock.
pub struct GenericInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info of `G`, building it with `f` if `G` is not present.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        // Another thread may have won the race since the read, `get_or_insert`
        // keeps its entry and drops `f` unused.
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || {
                let info: &'static TypeInfo = Box::leak(Box::new(build(f)));
                info
            })
    }
}

impl Default for GenericInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GenericInfoCell, NonGenericInfoCell};
    use crate::info::{FieldDescriptor, PositionalInfo, TypeInfo, VariantCase};
    use crate::kind::{Classify, TypeKind};
    use core::marker::PhantomData;

    struct Holder<T>(PhantomData<T>);

    impl<T> Classify for Holder<T> {
        const KIND: TypeKind = TypeKind::Positional;
    }

    fn holder_info<T: 'static>(cell: &GenericInfoCell) -> &TypeInfo {
        cell.get_or_insert::<Holder<T>>(|| {
            TypeInfo::Positional(PositionalInfo::new::<Holder<T>>("Holder", &[], &[]))
        })
    }

    #[test]
    fn generic_cell_separates_instantiations() {
        let cell = GenericInfoCell::new();
        let a = holder_info::<u8>(&cell);
        let b = holder_info::<u16>(&cell);
        assert!(!core::ptr::eq(a, b));
        assert!(core::ptr::eq(a, holder_info::<u8>(&cell)));
        assert_ne!(a.ty().id(), b.ty().id());
    }

    #[test]
    fn non_generic_cell_builds_once() {
        let cell = NonGenericInfoCell::new();
        let mut calls = 0;
        for _ in 0..3 {
            cell.get_or_init(|| {
                calls += 1;
                TypeInfo::Positional(PositionalInfo::new::<Holder<()>>("Holder", &[], &[]))
            });
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn cell_accepts_fields_with_cases() {
        static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
        let info = CELL.get_or_init(|| {
            TypeInfo::Positional(PositionalInfo::new::<Holder<f64>>(
                "Holder",
                &[FieldDescriptor::positional::<f64>(0)],
                &[VariantCase::new::<f64>("F64", &[0])],
            ))
        });
        assert_eq!(info.field_len(), 1);
        assert_eq!(info.cases()[0].ident(), "F64");
    }
}
