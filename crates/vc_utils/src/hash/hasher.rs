//! The fixed hash state used by every name index.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

const NAME_SEED: FixedState = FixedState::with_seed(0x6d65_7461_5f6e_616d);

/// `foldhash` with a constant seed.
///
/// Field-name tables are built with this state, so a name hashes the same in
/// every build and on every thread.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use vc_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("x"), FixedHashState.hash_one("x"));
/// assert_ne!(FixedHashState.hash_one("x"), FixedHashState.hash_one("y"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        NAME_SEED.build_hasher()
    }
}
