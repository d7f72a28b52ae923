//! Dispatch tables reaching fields without per-type code.
//!
//! - [`Accessor`]: a typed handle to one field.
//! - [`NameTable`]: field name to accessor, named types only.
//! - [`OrdinalTable`]: ordinal to field reference, every `Meta` type.
//! - [`LookupError`]: the failures of both tables.

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod name_table;
mod ordinal_table;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::Accessor;
pub use error::LookupError;
pub use name_table::NameTable;
pub use ordinal_table::OrdinalTable;
