use super::{Element, ElementKind};

/// How a declaration addresses its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Fields are reached by name and by ordinal.
    Named,
    /// Fields are reached by ordinal only.
    Positional,
}

/// Classifies a raw declaration.
///
/// Positional iff every element is an accessor, so the empty declaration is
/// positional too. Grouping is never consulted.
pub(crate) fn classify_shape(elements: &[Element]) -> Shape {
    if elements
        .iter()
        .all(|element| element.kind() == ElementKind::Accessor)
    {
        Shape::Positional
    } else {
        Shape::Named
    }
}
