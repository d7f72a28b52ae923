use core::marker::PhantomData;

use crate::kind::{Classify, TypeKind};

impl<T: ?Sized> Classify for PhantomData<T> {
    const KIND: TypeKind = TypeKind::None;
}
