//! Type classification.
//!
//! - [`TypeKind`]: the serialization category of a type.
//! - [`Classify`]: assigns the kind, plus optional [`Capabilities`].
//! - [`PairLike`], [`MapLike`], [`SequenceLike`], [`Nullable`]: the
//!   operations each container kind exposes.
//! - [`Basic`], [`BasicMut`]: closed unions over the scalar kinds.
//! - `is_*` predicates, [`kind_of`], [`require_supported`] and
//!   [`assert_kind!`](crate::assert_kind) for use in `const` contexts.

// -----------------------------------------------------------------------------
// Modules

mod basic;
mod capability;
mod classify;
mod type_kind;

// -----------------------------------------------------------------------------
// Exports

pub use basic::{Basic, BasicMut};
pub use capability::{MapLike, Nullable, PairLike, SequenceLike};
pub use classify::{Capabilities, Classify, kind_of, require_supported};
pub use classify::{is_bool, is_char, is_float, is_integer, is_numeric, is_string};
pub use classify::{is_map, is_nullable, is_pair, is_sequence, is_tuple};
pub use classify::{is_named, is_positional, is_structured, is_unsupported};
pub use type_kind::TypeKind;
