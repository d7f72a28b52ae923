use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::kind::{Classify, TypeKind};

/// The base representation of a Rust type.
///
/// Includes the [`TypeId`], the type path reported by
/// [`core::any::type_name`] and the [`TypeKind`].
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_meta::info::Type;
/// use vc_meta::kind::TypeKind;
///
/// let ty = Type::of::<Vec<u8>>();
///
/// assert!(ty.is::<Vec<u8>>());
/// assert_eq!(ty.id(), TypeId::of::<Vec<u8>>());
/// assert_eq!(ty.kind(), TypeKind::Sequence);
/// assert_eq!(ty.short_path(), "Vec<u8>");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    id: TypeId,
    path: &'static str,
    kind: TypeKind,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: Classify + ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
            kind: T::KIND,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Check if the given type matches this one.
    ///
    /// This only compares the [`TypeId`] of the types.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }

    /// The full type path, as reported by [`core::any::type_name`].
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// The kind of the type.
    #[inline(always)]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The type path with every module prefix removed, generics included.
    ///
    /// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
    pub fn short_path(&self) -> alloc::string::String {
        short_path(self.path)
    }
}

/// Removes the module prefix of every path segment in `path`.
pub(crate) fn short_path(path: &str) -> alloc::string::String {
    let mut out = alloc::string::String::with_capacity(path.len());
    let mut segment_start = 0;
    for (index, ch) in path.char_indices() {
        match ch {
            ':' => {
                segment_start = index + 1;
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                out.push_str(&path[segment_start..index]);
                out.push(ch);
                segment_start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    out.push_str(&path[segment_start..]);
    out
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .finish()
    }
}
