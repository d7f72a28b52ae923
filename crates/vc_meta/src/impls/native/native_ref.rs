//! References classify like their referent.
//!
//! Proxy element references, such as the items of a packed bit vector, are
//! read and written through `&T` and `&mut T`. Capabilities are not
//! forwarded, a reference cannot grow its referent.

use crate::kind::{Classify, TypeKind};

impl<T: Classify + ?Sized> Classify for &T {
    const KIND: TypeKind = T::KIND;
}

impl<T: Classify + ?Sized> Classify for &mut T {
    const KIND: TypeKind = T::KIND;
}

#[cfg(test)]
mod tests {
    use crate::kind::{Capabilities, Classify, TypeKind, kind_of};
    use alloc::vec::Vec;

    #[test]
    fn references_delegate() {
        assert_eq!(kind_of::<&bool>(), TypeKind::Bool);
        assert_eq!(kind_of::<&mut bool>(), TypeKind::Bool);
        assert_eq!(kind_of::<&'static str>(), TypeKind::String);
        assert_eq!(kind_of::<&&u8>(), TypeKind::Integer);
        assert_eq!(<&mut Vec<u8> as Classify>::CAPABILITIES, Capabilities::empty());
    }
}
