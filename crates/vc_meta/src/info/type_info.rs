use core::fmt;

use crate::info::{FieldDescriptor, NamedInfo, PositionalInfo, Type, VariantCase};
use crate::kind::TypeKind;

// -----------------------------------------------------------------------------
// Shape

/// How the fields of a `Meta` type are reached.
///
/// A declaration where every element is an accessor is positional, anything
/// else is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Fields are reached by name and by ordinal.
    Named,
    /// Fields are reached by ordinal only.
    Positional,
}

impl Shape {
    /// The [`TypeKind`] of types with this shape.
    #[inline]
    pub const fn kind(self) -> TypeKind {
        match self {
            Self::Named => TypeKind::Named,
            Self::Positional => TypeKind::Positional,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Named => "Named",
            Self::Positional => "Positional",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a [`TypeInfo`] does not have the expected [`Shape`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("shape mismatch: expected {expected}, received {received}")]
pub struct ShapeError {
    pub expected: Shape,
    pub received: Shape,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Build-time information of a `Meta` type.
///
/// Obtained from `Meta::type_info` or a
/// [`MetaRegistry`](crate::registry::MetaRegistry), always as a
/// `&'static TypeInfo` built once per type.
///
/// # Examples
///
/// ```
/// use vc_meta::{Meta, derive::Meta};
/// use vc_meta::info::Shape;
///
/// /// A position on the grid.
/// #[derive(Meta)]
/// struct Cell {
///     /// Zero based row.
///     row: u32,
///     col: u32,
/// }
///
/// let info = Cell::type_info();
///
/// assert_eq!(info.shape(), Shape::Named);
/// assert_eq!(info.ident(), "Cell");
/// assert_eq!(info.docs(), Some("A position on the grid."));
/// assert_eq!(info.fields()[0].docs(), Some("Zero based row."));
/// assert_eq!(info.cases().len(), 1);
/// assert!(info.as_positional().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Named(NamedInfo),
    Positional(PositionalInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $shape:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to the shape specific information.
        pub const fn $name(&self) -> Result<&$info, ShapeError> {
            match self {
                Self::$shape(info) => Ok(info),
                _ => Err(ShapeError {
                    expected: Shape::$shape,
                    received: self.shape(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_named: Named => NamedInfo);
    impl_cast_method!(as_positional: Positional => PositionalInfo);

    /// Returns the [`Shape`] of the type.
    #[inline]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Named(_) => Shape::Named,
            Self::Positional(_) => Shape::Positional,
        }
    }

    /// Returns the [`TypeKind`] of the type, `Named` or `Positional`.
    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.shape().kind()
    }

    #[inline]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    #[inline]
    pub const fn is_positional(&self) -> bool {
        matches!(self, Self::Positional(_))
    }

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Named(info) => info.ty(),
            Self::Positional(info) => info.ty(),
        }
    }

    /// Returns the type identifier, without module path or generics.
    pub const fn ident(&self) -> &'static str {
        match self {
            Self::Named(info) => info.ident(),
            Self::Positional(info) => info.ident(),
        }
    }

    /// Returns the documentation of the type, if any.
    pub const fn docs(&self) -> Option<&'static str> {
        match self {
            Self::Named(info) => info.docs(),
            Self::Positional(info) => info.docs(),
        }
    }

    /// Returns the field descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        match self {
            Self::Named(info) => info.fields(),
            Self::Positional(info) => info.fields(),
        }
    }

    /// Returns the descriptor of the field at ordinal `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields().get(index)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields().len()
    }

    /// Returns the variant cases, in first-occurrence order.
    pub fn cases(&self) -> &[VariantCase] {
        match self {
            Self::Named(info) => info.cases(),
            Self::Positional(info) => info.cases(),
        }
    }

    /// Returns the type path, see [`Type::path`].
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }
}

#[cfg(test)]
mod tests {
    use super::{Shape, ShapeError, TypeInfo};
    use crate::info::{FieldDescriptor, NamedInfo, VariantCase};
    use crate::kind::TypeKind;
    use alloc::string::ToString;

    struct Probe;

    impl crate::kind::Classify for Probe {
        const KIND: TypeKind = TypeKind::Named;
    }

    fn probe_info() -> TypeInfo {
        TypeInfo::Named(
            NamedInfo::new::<Probe>(
                "Probe",
                &[
                    FieldDescriptor::named::<u8>(0, "a"),
                    FieldDescriptor::named::<char>(1, "b").with_case(1),
                ],
                &[
                    VariantCase::new::<u8>("U8", &[0]),
                    VariantCase::new::<char>("Char", &[1]),
                ],
            )
            .with_docs(Some("probe")),
        )
    }

    #[test]
    fn casts_and_delegation() {
        let info = probe_info();
        assert_eq!(info.shape(), Shape::Named);
        assert_eq!(info.kind(), TypeKind::Named);
        assert_eq!(info.ident(), "Probe");
        assert_eq!(info.docs(), Some("probe"));
        assert_eq!(info.field_len(), 2);
        assert_eq!(info.field_at(1).map(|f| f.kind()), Some(TypeKind::Char));
        assert!(info.field_at(2).is_none());
        assert!(info.ty().is::<Probe>());

        let named = info.as_named().unwrap();
        assert_eq!(named.index_of("b"), Some(1));
        assert_eq!(named.case_of(1).map(|c| c.ident()), Some("Char"));
        assert_eq!(named.names().collect::<alloc::vec::Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn shape_error() {
        let err = probe_info().as_positional().unwrap_err();
        assert_eq!(
            err,
            ShapeError {
                expected: Shape::Positional,
                received: Shape::Named
            }
        );
        assert_eq!(err.to_string(), "shape mismatch: expected Positional, received Named");
    }
}
