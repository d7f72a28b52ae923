//! Splits a named declaration into field groups.
//!
//! A name element always opens a new group. Every other element is appended
//! to the open group. A group is checked when the next name arrives and at
//! the end of input, and must read `name, accessor[, doc]`.

use proc_macro2::Span;
use syn::{LitStr, Member};

use super::{Element, ElementKind};

/// A validated field group.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldDecl {
    pub name: Option<LitStr>,
    pub member: Member,
    pub doc: Option<LitStr>,
}

impl FieldDecl {
    /// A positional field, only an accessor.
    #[inline]
    pub fn positional(member: Member) -> Self {
        Self {
            name: None,
            member,
            doc: None,
        }
    }
}

/// Groups `elements` into field declarations.
///
/// An empty input yields an empty list.
pub(crate) fn group_elements(elements: Vec<Element>) -> syn::Result<Vec<FieldDecl>> {
    let mut fields = Vec::new();
    let mut group: Vec<Element> = Vec::with_capacity(3);

    for element in elements {
        if element.kind() == ElementKind::Name && !group.is_empty() {
            fields.push(close_group(core::mem::take(&mut group))?);
        }
        group.push(element);
    }

    if !group.is_empty() {
        fields.push(close_group(group)?);
    }

    Ok(fields)
}

fn close_group(group: Vec<Element>) -> syn::Result<FieldDecl> {
    if let Some(extra) = group.get(3) {
        return Err(syn::Error::new(
            extra.span(),
            "only name, accessor and doc are supported",
        ));
    }

    let span = group.first().map_or_else(Span::call_site, Element::span);
    let mut iter = group.into_iter();
    let (Some(first), Some(second)) = (iter.next(), iter.next()) else {
        return Err(syn::Error::new(
            span,
            "members need at least a name and an accessor",
        ));
    };

    let Element::Name(name) = first else {
        return Err(syn::Error::new(
            first.span(),
            "first element should be the field name",
        ));
    };

    let Element::Accessor(member) = second else {
        return Err(syn::Error::new(
            second.span(),
            "second element should be the field accessor",
        ));
    };

    let doc = match iter.next() {
        Some(Element::Doc(doc)) => Some(doc),
        Some(other) => {
            return Err(syn::Error::new(
                other.span(),
                "third element should be a `doc(..)` comment",
            ));
        }
        None => None,
    };

    Ok(FieldDecl {
        name: Some(name),
        member,
        doc,
    })
}

#[cfg(test)]
mod tests {
    use super::group_elements;
    use crate::decl::Element;
    use syn::parse::Parser;

    fn group(tokens: proc_macro2::TokenStream) -> syn::Result<Vec<super::FieldDecl>> {
        group_elements(Element::parse_list.parse2(tokens).unwrap())
    }

    fn error(tokens: proc_macro2::TokenStream) -> String {
        group(tokens).unwrap_err().to_string()
    }

    #[test]
    fn groups_in_order() {
        let fields = group(quote::quote!("a", a, "b", b, doc("about b"))).unwrap();
        assert_eq!(fields.len(), 2);

        assert_eq!(fields[0].name.as_ref().unwrap().value(), "a");
        assert_eq!(fields[0].member, syn::parse_quote!(a));
        assert!(fields[0].doc.is_none());

        assert_eq!(fields[1].name.as_ref().unwrap().value(), "b");
        assert_eq!(fields[1].member, syn::parse_quote!(b));
        assert_eq!(fields[1].doc.as_ref().unwrap().value(), "about b");
    }

    #[test]
    fn tuple_index_accessor() {
        let fields = group(quote::quote!("first", 0, "second", 1)).unwrap();
        assert_eq!(fields[1].member, syn::parse_quote!(1));
    }

    #[test]
    fn empty_input() {
        assert!(group(quote::quote!()).unwrap().is_empty());
    }

    #[test]
    fn group_too_small() {
        assert_eq!(
            error(quote::quote!("a", a, "b")),
            "members need at least a name and an accessor"
        );
        assert_eq!(
            error(quote::quote!(a, "b", b)),
            "members need at least a name and an accessor"
        );
    }

    #[test]
    fn group_too_large() {
        assert_eq!(
            error(quote::quote!("a", a, doc("x"), b)),
            "only name, accessor and doc are supported"
        );
    }

    #[test]
    fn misplaced_elements() {
        assert_eq!(
            error(quote::quote!(a, b)),
            "first element should be the field name"
        );
        assert_eq!(
            error(quote::quote!("a", doc("x"))),
            "second element should be the field accessor"
        );
        assert_eq!(
            error(quote::quote!("a", a, b)),
            "third element should be a `doc(..)` comment"
        );
    }
}
