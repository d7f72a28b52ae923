//! Operations codecs need on each container kind.

/// A two element product.
pub trait PairLike {
    type First;
    type Second;

    fn first(&self) -> &Self::First;
    fn second(&self) -> &Self::Second;
    fn first_mut(&mut self) -> &mut Self::First;
    fn second_mut(&mut self) -> &mut Self::Second;
}

/// A keyed container.
///
/// Iteration yields pair-like `(&K, &V)` entries.
pub trait MapLike {
    type Key;
    type Value;

    fn len(&self) -> usize;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// The value at `key`, inserting a default one when absent.
    fn get_or_insert_default(&mut self, key: Self::Key) -> &mut Self::Value
    where
        Self::Value: Default;
}

/// A container of values.
///
/// Only `len`, `items` and `push_item` are universal. The rest report through
/// their return value whether the container supports them, see
/// [`Capabilities`](super::Capabilities).
pub trait SequenceLike {
    type Item;

    fn len(&self) -> usize;

    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Adds `item`, handing it back if the container is fixed size.
    fn push_item(&mut self, item: Self::Item) -> Result<(), Self::Item>;

    /// Appends a default item and returns it.
    fn emplace_back(&mut self) -> Option<&mut Self::Item>
    where
        Self::Item: Default,
    {
        None
    }

    /// Resizes to `len`, filling with default items. Returns `false` when
    /// the container cannot take that length.
    fn resize_default(&mut self, len: usize) -> bool
    where
        Self::Item: Default,
    {
        len == self.len()
    }
}

/// A value that may be absent.
pub trait Nullable {
    type Inner;

    fn is_null(&self) -> bool;

    fn inner(&self) -> Option<&Self::Inner>;

    fn inner_mut(&mut self) -> Option<&mut Self::Inner>;

    /// The inner value, inserting a default one when absent.
    fn get_or_insert_default(&mut self) -> &mut Self::Inner
    where
        Self::Inner: Default;

    fn set_null(&mut self);
}
