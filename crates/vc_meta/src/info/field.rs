use core::any::Any;

use crate::info::{Type, impl_docs_fn};
use crate::kind::{Classify, TypeKind};

/// Describes one declared field.
///
/// Named types give every field a name, positional types give none. The
/// ordinal is the position in the declaration.
///
/// # Examples
///
/// ```
/// use vc_meta::info::FieldDescriptor;
/// use vc_meta::kind::TypeKind;
///
/// let field = FieldDescriptor::named::<f32>(1, "speed").with_docs(Some("Meters per second."));
///
/// assert_eq!(field.index(), 1);
/// assert_eq!(field.name(), Some("speed"));
/// assert_eq!(field.kind(), TypeKind::Float);
/// assert!(field.type_is::<f32>());
/// assert!(field.has_docs());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    index: usize,
    name: Option<&'static str>,
    ty: Type,
    case: usize,
    docs: Option<&'static str>,
}

impl FieldDescriptor {
    impl_docs_fn!(docs);

    /// Creates the descriptor of a named field of type `F` at ordinal `index`.
    #[inline]
    pub fn named<F: Classify + ?Sized + 'static>(index: usize, name: &'static str) -> Self {
        Self {
            index,
            name: Some(name),
            ty: Type::of::<F>(),
            case: 0,
            docs: None,
        }
    }

    /// Creates the descriptor of an unnamed field of type `F` at ordinal `index`.
    #[inline]
    pub fn positional<F: Classify + ?Sized + 'static>(index: usize) -> Self {
        Self {
            index,
            name: None,
            ty: Type::of::<F>(),
            case: 0,
            docs: None,
        }
    }

    /// Sets the variant case the field maps to.
    ///
    /// Used by the proc-macro crate.
    #[inline]
    pub fn with_case(self, case: usize) -> Self {
        Self { case, ..self }
    }

    /// Ordinal position of the field.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declared name, `None` for positional types.
    #[inline(always)]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The field's value [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// The [`TypeKind`] of the field's value type.
    #[inline(always)]
    pub const fn kind(&self) -> TypeKind {
        self.ty.kind()
    }

    /// Check if the field has type `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Index of the variant case in [`TypeInfo::cases`](crate::info::TypeInfo::cases).
    #[inline(always)]
    pub const fn case(&self) -> usize {
        self.case
    }
}
