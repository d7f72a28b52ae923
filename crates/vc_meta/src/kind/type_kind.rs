use core::fmt;

/// The serialization category of a type.
///
/// Every type implementing [`Classify`](super::Classify) has exactly one
/// kind. Codecs branch on it to pick an encoding strategy.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKind {
    /// `bool` and boolean proxies.
    Bool,
    /// `char`, never an integer.
    Char,
    /// Signed and unsigned integers.
    Integer,
    /// `f32` and `f64`.
    Float,
    /// Owned or borrowed text.
    String,
    /// A two element product with `first` and `second`.
    Pair,
    /// Iterable container of pair-like entries with keyed insertion.
    Map,
    /// Iterable container of values.
    Sequence,
    /// Fixed arity heterogeneous product, not iterable.
    Tuple,
    /// A value that may be absent.
    Nullable,
    /// A `Meta` type whose fields are reached by name.
    Named,
    /// A `Meta` type whose fields are reached by ordinal.
    Positional,
    /// Not supported by codecs.
    None,
}

impl TypeKind {
    /// All kinds, in declaration order.
    pub const ALL: [TypeKind; 13] = [
        TypeKind::Bool,
        TypeKind::Char,
        TypeKind::Integer,
        TypeKind::Float,
        TypeKind::String,
        TypeKind::Pair,
        TypeKind::Map,
        TypeKind::Sequence,
        TypeKind::Tuple,
        TypeKind::Nullable,
        TypeKind::Named,
        TypeKind::Positional,
        TypeKind::None,
    ];

    /// `const` equality.
    #[inline]
    pub const fn same_as(self, other: TypeKind) -> bool {
        self as u8 == other as u8
    }

    /// Integer or float.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, TypeKind::Integer | TypeKind::Float)
    }

    /// Bool, char, number or string.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            TypeKind::Bool | TypeKind::Char | TypeKind::Integer | TypeKind::Float | TypeKind::String
        )
    }

    /// A `Meta` type, named or positional.
    #[inline]
    pub const fn is_structured(self) -> bool {
        matches!(self, TypeKind::Named | TypeKind::Positional)
    }

    /// Map or sequence, the iterable containers.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, TypeKind::Map | TypeKind::Sequence)
    }

    /// Anything but [`TypeKind::None`].
    #[inline]
    pub const fn is_supported(self) -> bool {
        !matches!(self, TypeKind::None)
    }

    /// Lower case name, `"integer"`, `"named"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeKind::Bool => "bool",
            TypeKind::Char => "char",
            TypeKind::Integer => "integer",
            TypeKind::Float => "float",
            TypeKind::String => "string",
            TypeKind::Pair => "pair",
            TypeKind::Map => "map",
            TypeKind::Sequence => "sequence",
            TypeKind::Tuple => "tuple",
            TypeKind::Nullable => "nullable",
            TypeKind::Named => "named",
            TypeKind::Positional => "positional",
            TypeKind::None => "none",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::TypeKind;

    #[test]
    fn groups_do_not_overlap() {
        for kind in TypeKind::ALL {
            let groups = [
                kind.is_scalar(),
                kind.is_container(),
                kind.is_structured(),
                matches!(kind, TypeKind::Pair | TypeKind::Tuple | TypeKind::Nullable),
                !kind.is_supported(),
            ];
            assert_eq!(groups.iter().filter(|g| **g).count(), 1, "{kind}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(TypeKind::Integer.to_string(), "integer");
        assert_eq!(format!("{:>5}", TypeKind::Map), "  map");
        assert!(TypeKind::Named.same_as(TypeKind::Named));
        assert!(!TypeKind::Named.same_as(TypeKind::Positional));
    }
}
