use bitflags::bitflags;

use super::TypeKind;

bitflags! {
    /// Optional operations a container supports, probed by decoders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Append a default value and get it back mutably.
        const EMPLACE_BACK = 1 << 0;
        /// Resize in place, filling with default values.
        const RESIZE       = 1 << 1;
        /// Look up a key, inserting a default value when absent.
        const KEYED_INSERT = 1 << 2;
    }
}

/// Assigns a [`TypeKind`] to a type.
///
/// One impl carries one constant, so a type can never fall into two kinds.
/// `#[derive(Meta)]` implements this for the derived type.
///
/// # Examples
///
/// ```
/// use vc_meta::kind::{Capabilities, Classify, TypeKind};
///
/// assert_eq!(<Vec<u8> as Classify>::KIND, TypeKind::Sequence);
/// assert!(<Vec<u8> as Classify>::CAPABILITIES.contains(Capabilities::RESIZE));
/// assert_eq!(<char as Classify>::KIND, TypeKind::Char);
/// ```
pub trait Classify {
    /// The kind of `Self`.
    const KIND: TypeKind;

    /// Optional container operations.
    const CAPABILITIES: Capabilities = Capabilities::empty();
}

/// The kind of `T`.
#[inline(always)]
pub const fn kind_of<T: Classify + ?Sized>() -> TypeKind {
    T::KIND
}

macro_rules! impl_kind_predicates {
    ($($(#[$attr:meta])* $name:ident => $($kind:ident)|+;)*) => {
        $(
            $(#[$attr])*
            #[inline(always)]
            pub const fn $name<T: Classify + ?Sized>() -> bool {
                matches!(T::KIND, $(TypeKind::$kind)|+)
            }
        )*
    };
}

impl_kind_predicates! {
    /// `bool` and boolean proxies.
    is_bool => Bool;
    /// `char`.
    is_char => Char;
    /// Integers.
    is_integer => Integer;
    /// `f32` and `f64`.
    is_float => Float;
    /// Integers and floats.
    is_numeric => Integer | Float;
    /// Text types.
    is_string => String;
    /// Two element products.
    is_pair => Pair;
    /// Keyed containers.
    is_map => Map;
    /// Value containers.
    is_sequence => Sequence;
    /// Fixed arity products other than pairs.
    is_tuple => Tuple;
    /// Optional values.
    is_nullable => Nullable;
    /// `Meta` types reached by name.
    is_named => Named;
    /// `Meta` types reached by ordinal.
    is_positional => Positional;
    /// Any `Meta` type.
    is_structured => Named | Positional;
    /// Types codecs do not support.
    is_unsupported => None;
}

/// The kind of `T`, failing compilation if `T` is unsupported.
///
/// The check runs when the call is monomorphized.
///
/// ```
/// use vc_meta::kind::{TypeKind, require_supported};
///
/// assert_eq!(require_supported::<String>(), TypeKind::String);
/// ```
///
/// ```compile_fail
/// use vc_meta::kind::require_supported;
///
/// let _ = require_supported::<()>();
/// ```
#[inline(always)]
pub const fn require_supported<T: Classify + ?Sized>() -> TypeKind {
    const {
        assert!(T::KIND.is_supported(), "this type is not supported by codecs");
    }
    T::KIND
}

/// Fails compilation unless the type has one of the listed kinds.
///
/// ```
/// vc_meta::assert_kind!(Vec<u8>, Sequence);
/// vc_meta::assert_kind!(u8, Integer | Float);
/// ```
///
/// ```compile_fail
/// vc_meta::assert_kind!(char, Integer);
/// ```
#[macro_export]
macro_rules! assert_kind {
    ($ty:ty, $($kind:ident)|+) => {
        const _: () = ::core::assert!(
            ::core::matches!(
                <$ty as $crate::kind::Classify>::KIND,
                $($crate::kind::TypeKind::$kind)|+
            ),
            ::core::concat!("`", ::core::stringify!($ty), "` does not have the required kind"),
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_follow_kind() {
        assert!(is_numeric::<u8>() && is_numeric::<f64>());
        assert!(!is_numeric::<char>());
        assert!(is_pair::<(u8, char)>() && is_tuple::<(u8, char, bool)>());
        assert!(is_unsupported::<()>());
        assert_eq!(kind_of::<str>(), TypeKind::String);
    }
}
