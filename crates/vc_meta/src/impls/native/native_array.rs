use crate::kind::{Classify, SequenceLike, TypeKind};

impl<T, const N: usize> Classify for [T; N] {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<T> Classify for [T] {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<T, const N: usize> SequenceLike for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        Err(item)
    }
}

impl<T> SequenceLike for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        Err(item)
    }
}
