//! `Serialize` for the introspection types, so tooling can dump schemas.

use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

use crate::info::{FieldDescriptor, Shape, Type, TypeInfo, VariantCase};
use crate::kind::TypeKind;

// Unit variants, spelled as the Rust variant.
impl Serialize for TypeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let variant = match self {
            TypeKind::Bool => "Bool",
            TypeKind::Char => "Char",
            TypeKind::Integer => "Integer",
            TypeKind::Float => "Float",
            TypeKind::String => "String",
            TypeKind::Pair => "Pair",
            TypeKind::Map => "Map",
            TypeKind::Sequence => "Sequence",
            TypeKind::Tuple => "Tuple",
            TypeKind::Nullable => "Nullable",
            TypeKind::Named => "Named",
            TypeKind::Positional => "Positional",
            TypeKind::None => "None",
        };
        serializer.serialize_unit_variant("TypeKind", *self as u32, variant)
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit_variant("Shape", *self as u32, self.as_str())
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Type", 2)?;
        state.serialize_field("path", self.path())?;
        state.serialize_field("kind", &self.kind())?;
        state.end()
    }
}

impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldDescriptor", 5)?;
        state.serialize_field("index", &self.index())?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("type", self.ty())?;
        state.serialize_field("case", &self.case())?;
        state.serialize_field("docs", &self.docs())?;
        state.end()
    }
}

impl Serialize for VariantCase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VariantCase", 3)?;
        state.serialize_field("ident", self.ident())?;
        state.serialize_field("type", self.ty())?;
        state.serialize_field("ordinals", self.ordinals())?;
        state.end()
    }
}

impl Serialize for TypeInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TypeInfo", 6)?;
        state.serialize_field("ident", self.ident())?;
        state.serialize_field("path", self.type_path())?;
        state.serialize_field("shape", &self.shape())?;
        state.serialize_field("docs", &self.docs())?;
        state.serialize_field("fields", self.fields())?;
        state.serialize_field("cases", self.cases())?;
        state.end()
    }
}
