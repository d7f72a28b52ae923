use alloc::boxed::Box;
use alloc::collections::{BinaryHeap, LinkedList, VecDeque};
use alloc::vec::Vec;

use crate::kind::{Capabilities, Classify, SequenceLike, TypeKind};

impl<T> Classify for Vec<T> {
    const KIND: TypeKind = TypeKind::Sequence;
    const CAPABILITIES: Capabilities = Capabilities::EMPLACE_BACK.union(Capabilities::RESIZE);
}

impl<T> Classify for VecDeque<T> {
    const KIND: TypeKind = TypeKind::Sequence;
    const CAPABILITIES: Capabilities = Capabilities::EMPLACE_BACK.union(Capabilities::RESIZE);
}

impl<T> Classify for LinkedList<T> {
    const KIND: TypeKind = TypeKind::Sequence;
    const CAPABILITIES: Capabilities = Capabilities::EMPLACE_BACK.union(Capabilities::RESIZE);
}

impl<T> Classify for BinaryHeap<T> {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<T> Classify for Box<[T]> {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<T> SequenceLike for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        self.push(item);
        Ok(())
    }

    #[inline]
    fn emplace_back(&mut self) -> Option<&mut T>
    where
        T: Default,
    {
        self.push(T::default());
        self.last_mut()
    }

    #[inline]
    fn resize_default(&mut self, len: usize) -> bool
    where
        T: Default,
    {
        self.resize_with(len, T::default);
        true
    }
}

impl<T> SequenceLike for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        self.push_back(item);
        Ok(())
    }

    #[inline]
    fn emplace_back(&mut self) -> Option<&mut T>
    where
        T: Default,
    {
        self.push_back(T::default());
        self.back_mut()
    }

    #[inline]
    fn resize_default(&mut self, len: usize) -> bool
    where
        T: Default,
    {
        self.resize_with(len, T::default);
        true
    }
}

impl<T> SequenceLike for LinkedList<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        self.push_back(item);
        Ok(())
    }

    #[inline]
    fn emplace_back(&mut self) -> Option<&mut T>
    where
        T: Default,
    {
        self.push_back(T::default());
        self.back_mut()
    }

    fn resize_default(&mut self, len: usize) -> bool
    where
        T: Default,
    {
        if len < LinkedList::len(self) {
            drop(self.split_off(len));
        }
        while LinkedList::len(self) < len {
            self.push_back(T::default());
        }
        true
    }
}

impl<T: Ord> SequenceLike for BinaryHeap<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        self.push(item);
        Ok(())
    }
}

impl<T> SequenceLike for Box<[T]> {
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

#[cfg(test)]
mod tests {
    use crate::kind::{Capabilities, Classify, SequenceLike};
    use alloc::collections::{BinaryHeap, LinkedList, VecDeque};
    use alloc::vec::Vec;

    #[test]
    fn growable_sequences() {
        let caps = <Vec<u8> as Classify>::CAPABILITIES;
        assert!(caps.contains(Capabilities::EMPLACE_BACK | Capabilities::RESIZE));
        assert!(!caps.contains(Capabilities::KEYED_INSERT));
        assert_eq!(<BinaryHeap<u8> as Classify>::CAPABILITIES, Capabilities::empty());

        let mut vec = Vec::<u8>::new();
        *SequenceLike::emplace_back(&mut vec).unwrap() = 7;
        assert!(SequenceLike::resize_default(&mut vec, 3));
        assert_eq!(vec, [7, 0, 0]);

        let mut deque = VecDeque::<u8>::new();
        assert_eq!(deque.push_item(1), Ok(()));
        assert!(deque.emplace_back().is_some());
        assert_eq!(SequenceLike::len(&deque), 2);
    }

    #[test]
    fn linked_list_resize() {
        let mut list: LinkedList<u8> = [1, 2, 3].into_iter().collect();
        assert!(list.resize_default(1));
        assert_eq!(list.items().copied().collect::<Vec<_>>(), [1]);
        assert!(list.resize_default(2));
        assert_eq!(list.items().copied().collect::<Vec<_>>(), [1, 0]);
    }
}
