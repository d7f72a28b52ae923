//! Storage cells for `Meta::type_info`, and `Classify` impls for foreign types.
//!
//! ## Implemented Menu
//!
//! - native:
//!     - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `str`, `&T`, `&mut T` (classified like `T`)
//!     - `[T]`, `[T; N]`
//!     - `()`, `(P0,)`, `(P0, P1)`, ... up to twelve elements
//! - core:
//!     - `NonZero` integers, `AtomicBool`, integer atomics
//!     - `Option<T>`, `PhantomData<T>`
//! - alloc:
//!     - `String`, `Box<str>`, `Rc<str>`, `Arc<str>`, `Cow<'_, str>`
//!     - `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `BinaryHeap<T>`, `Box<[T]>`
//!     - `BTreeMap<K, V>`, `BTreeSet<T>`
//! - std:
//!     - `HashMap<K, V, S>`, `HashSet<T, S>`
//! - vc_utils:
//!     - `hashbrown::HashMap`, `hashbrown::HashSet` (and so `vc_utils::hash::*`)

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod alloc;
mod core;
mod native;
mod std;
mod vc_utils;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericInfoCell, NonGenericInfoCell};

// -----------------------------------------------------------------------------
// Internal API

/// Implements `Classify` for a list of types sharing a kind.
macro_rules! impl_classify {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::kind::Classify for $ty {
                const KIND: $crate::kind::TypeKind = $crate::kind::TypeKind::$kind;
            }
        )+
    };
}

pub(crate) use impl_classify;
