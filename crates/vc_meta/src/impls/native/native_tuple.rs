use crate::kind::{Classify, PairLike, TypeKind};

impl<A, B> Classify for (A, B) {
    const KIND: TypeKind = TypeKind::Pair;
}

impl<A, B> PairLike for (A, B) {
    type First = A;
    type Second = B;

    #[inline]
    fn first(&self) -> &A {
        &self.0
    }

    #[inline]
    fn second(&self) -> &B {
        &self.1
    }

    #[inline]
    fn first_mut(&mut self) -> &mut A {
        &mut self.0
    }

    #[inline]
    fn second_mut(&mut self) -> &mut B {
        &mut self.1
    }
}

macro_rules! impl_classify_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Classify for ($($name,)+) {
            const KIND: TypeKind = TypeKind::Tuple;
        }
    };
}

impl_classify_tuple!(P0);
impl_classify_tuple!(P0, P1, P2);
impl_classify_tuple!(P0, P1, P2, P3);
impl_classify_tuple!(P0, P1, P2, P3, P4);
impl_classify_tuple!(P0, P1, P2, P3, P4, P5);
impl_classify_tuple!(P0, P1, P2, P3, P4, P5, P6);
impl_classify_tuple!(P0, P1, P2, P3, P4, P5, P6, P7);
impl_classify_tuple!(P0, P1, P2, P3, P4, P5, P6, P7, P8);
impl_classify_tuple!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9);
impl_classify_tuple!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
impl_classify_tuple!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);

#[cfg(test)]
mod tests {
    use crate::kind::{PairLike, TypeKind, kind_of};
    use alloc::string::String;

    #[test]
    fn arity_two_is_pair() {
        assert_eq!(kind_of::<(u8,)>(), TypeKind::Tuple);
        assert_eq!(kind_of::<(u8, String)>(), TypeKind::Pair);
        assert_eq!(kind_of::<(u8, u8, u8)>(), TypeKind::Tuple);
        assert_eq!(kind_of::<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>(), TypeKind::Tuple);

        let mut pair = (1_u8, 'a');
        *pair.first_mut() += 1;
        *pair.second_mut() = 'b';
        assert_eq!((*pair.first(), *pair.second()), (2, 'b'));
    }
}
