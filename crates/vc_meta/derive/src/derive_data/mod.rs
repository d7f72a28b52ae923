//! Tools for turning the derive input into a checked model.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod docs;
mod meta_struct;

// -----------------------------------------------------------------------------
// Internal API

use docs::MetaDocs;

pub(crate) use attributes::{DeclKind, FieldAttributes, TypeAttributes};
pub(crate) use meta_struct::MetaStruct;
