//! A run-time index of `Meta` types.
//!
//! ## auto_register
//!
//! See [`MetaRegistry::auto_register`].
//!
//! Static registration is implemented with the [`inventory`] crate. Not all
//! platforms support it. Where it is unsupported `auto_register` registers
//! nothing and returns `false`.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod meta_registry;

// -----------------------------------------------------------------------------
// Exports

pub use meta_registry::{MetaRegistry, MetaRegistryArc};
