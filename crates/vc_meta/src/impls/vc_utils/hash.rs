//! `vc_utils::hash::HashMap` and `HashSet` are aliases of the `hashbrown`
//! containers, so covering `hashbrown` covers them.

use core::hash::{BuildHasher, Hash};

use vc_utils::hash::hashbrown::{HashMap, HashSet};

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

    #[inline]
    fn push_item(&mut self, item: T) -> Result<(), T> {
        if self.contains(&item) {
            return Err(item);
        }
        self.insert(item);
        Ok(())
    }
}
