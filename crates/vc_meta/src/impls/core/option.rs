use crate::kind::{Classify, Nullable, TypeKind};

impl<T> Classify for Option<T> {
    const KIND: TypeKind = TypeKind::Nullable;
}

impl<T> Nullable for Option<T> {
    type Inner = T;

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn inner(&self) -> Option<&T> {
        self.as_ref()
    }

    #[inline]
    fn inner_mut(&mut self) -> Option<&mut T> {
        self.as_mut()
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    #[inline]
    fn set_null(&mut self) {
        *self = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::{Nullable, TypeKind, kind_of};
    use alloc::string::String;

    #[test]
    fn option_is_nullable() {
        assert_eq!(kind_of::<Option<u8>>(), TypeKind::Nullable);
        assert_eq!(kind_of::<core::marker::PhantomData<u8>>(), TypeKind::None);

        let mut value: Option<String> = None;
        assert!(Nullable::is_null(&value));
        Nullable::get_or_insert_default(&mut value).push('x');
        assert_eq!(Nullable::inner(&value).map(String::as_str), Some("x"));
        Nullable::set_null(&mut value);
        assert!(value.is_none());
    }
}
