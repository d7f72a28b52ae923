use alloc::collections::{BTreeMap, BTreeSet};

use crate::kind::{Capabilities, Classify, MapLike, SequenceLike, TypeKind};

impl<K, V> Classify for BTreeMap<K, V> {
    const KIND: TypeKind = TypeKind::Map;
    const CAPABILITIES: Capabilities = Capabilities::KEYED_INSERT;
}

impl<T> Classify for BTreeSet<T> {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<K: Ord, V> MapLike for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }
}

impl<T: Ord> SequenceLike for BTreeSet<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    /// Hands `item` back if an equal one is already present.
    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        if self.contains(&item) {
            return Err(item);
        }
        self.insert(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::{MapLike, SequenceLike, TypeKind, kind_of};
    use alloc::collections::{BTreeMap, BTreeSet};

    #[test]
    fn btree_containers() {
        assert_eq!(kind_of::<BTreeMap<u8, u8>>(), TypeKind::Map);
        assert_eq!(kind_of::<BTreeSet<u8>>(), TypeKind::Sequence);

        let mut map = BTreeMap::<u8, u32>::new();
        *map.get_or_insert_default(1) += 5;
        *map.get_or_insert_default(1) += 5;
        assert_eq!(map.get(&1), Some(&10));
        assert_eq!(map.entries().count(), 1);

        let mut set = BTreeSet::new();
        assert_eq!(set.push_item(1_u8), Ok(()));
        assert_eq!(set.push_item(1_u8), Err(1));
        assert_eq!(SequenceLike::len(&set), 1);
    }
}
