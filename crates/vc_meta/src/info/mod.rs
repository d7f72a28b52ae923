//! Build-time type information of `Meta` types.
//!
//! - [`Type`]: `TypeId`, type path and [`TypeKind`](crate::kind::TypeKind).
//! - [`FieldDescriptor`]: one declared field.
//! - [`VariantCase`]: one case of the generated variant enums.
//! - [`TypeInfo`]: [`NamedInfo`] or [`PositionalInfo`], selected by [`Shape`].
//!
//! All of them implement `serde::Serialize`.

// -----------------------------------------------------------------------------
// Modules

mod docs_macro;

mod field;
mod named_info;
mod positional_info;
mod serialize;
mod ty;
mod type_info;
mod variant_case;

#[cfg(all(debug_assertions, feature = "debug"))]
mod validate;

// -----------------------------------------------------------------------------
// Internal API

use docs_macro::{impl_docs_fn, impl_fields_fn};

pub(crate) use ty::short_path;

#[cfg(all(debug_assertions, feature = "debug"))]
pub(crate) use validate::validate;

// -----------------------------------------------------------------------------
// Exports

pub use field::FieldDescriptor;
pub use named_info::NamedInfo;
pub use positional_info::PositionalInfo;
pub use ty::Type;
pub use type_info::{Shape, ShapeError, TypeInfo};
pub use variant_case::VariantCase;
