//! Metadata declarations: element parsing, shape detection and grouping.

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod element;
mod grouping;
mod shape;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use builder::Declaration;
pub(crate) use element::{Element, ElementKind};
pub(crate) use grouping::{FieldDecl, group_elements};
pub(crate) use shape::{Shape, classify_shape};
