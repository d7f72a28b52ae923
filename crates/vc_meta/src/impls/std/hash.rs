use core::hash::{BuildHasher, Hash};
use std::collections::{HashMap, HashSet};

use crate::kind::{Capabilities, Classify, MapLike, SequenceLike, TypeKind};

impl<K, V, S> Classify for HashMap<K, V, S> {
    const KIND: TypeKind = TypeKind::Map;
    const CAPABILITIES: Capabilities = Capabilities::KEYED_INSERT;
}

impl<T, S> Classify for HashSet<T, S> {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<K: Eq + Hash, V, S: BuildHasher> MapLike for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
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

impl<T: Eq + Hash, S: BuildHasher> SequenceLike for HashSet<T, S> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
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
    use crate::kind::{Capabilities, Classify, MapLike, TypeKind, kind_of};
    use alloc::string::String;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn std_hash_containers() {
        assert_eq!(kind_of::<HashSet<u8>>(), TypeKind::Sequence);
        assert_eq!(
            <HashMap<String, u8> as Classify>::CAPABILITIES,
            Capabilities::KEYED_INSERT
        );

        let mut map = HashMap::<String, u8>::new();
        *map.get_or_insert_default("a".into()) = 3;
        assert_eq!(MapLike::len(&map), 1);
        assert_eq!(map["a"], 3);
    }
}
