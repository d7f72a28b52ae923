use std::collections::HashSet;

use super::{Element, FieldDecl, Shape, classify_shape, group_elements};

/// A validated declaration: its shape and the ordered field list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Declaration {
    pub shape: Shape,
    pub fields: Vec<FieldDecl>,
}

impl Declaration {
    /// A declaration without fields.
    #[inline]
    pub fn empty() -> Self {
        Self {
            shape: Shape::Positional,
            fields: Vec::new(),
        }
    }

    /// The `array(..)` builder, accessors only.
    pub fn positional(elements: Vec<Element>) -> syn::Result<Self> {
        let fields = elements
            .into_iter()
            .map(|element| match element {
                Element::Accessor(member) => Ok(FieldDecl::positional(member)),
                other => Err(syn::Error::new(
                    other.span(),
                    "`array(..)` only accepts field accessors",
                )),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            shape: Shape::Positional,
            fields,
        })
    }

    /// The `object(..)` builder, always grouped.
    ///
    /// An empty list has no field to name, so it stays positional.
    pub fn named(elements: Vec<Element>) -> syn::Result<Self> {
        if elements.is_empty() {
            return Ok(Self::empty());
        }

        let fields = group_elements(elements)?;
        check_unique_names(&fields)?;

        Ok(Self {
            shape: Shape::Named,
            fields,
        })
    }

    /// Picks the builder from the shape of `elements`.
    pub fn classify(elements: Vec<Element>) -> syn::Result<Self> {
        match classify_shape(&elements) {
            Shape::Positional => Self::positional(elements),
            Shape::Named => Self::named(elements),
        }
    }
}

fn check_unique_names(fields: &[FieldDecl]) -> syn::Result<()> {
    let mut seen = HashSet::with_capacity(fields.len());
    for name in fields.iter().filter_map(|field| field.name.as_ref()) {
        if !seen.insert(name.value()) {
            return Err(syn::Error::new(
                name.span(),
                format!("duplicate field name `{}`", name.value()),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Declaration;
    use crate::decl::{Element, Shape};
    use syn::parse::Parser;

    fn elements(tokens: proc_macro2::TokenStream) -> Vec<Element> {
        Element::parse_list.parse2(tokens).unwrap()
    }

    #[test]
    fn positional_builder() {
        let decl = Declaration::positional(elements(quote::quote!(a, b, 2))).unwrap();
        assert_eq!(decl.shape, Shape::Positional);
        assert_eq!(decl.fields.len(), 3);
        assert!(decl.fields.iter().all(|f| f.name.is_none()));

        let err = Declaration::positional(elements(quote::quote!(a, "b"))).unwrap_err();
        assert_eq!(err.to_string(), "`array(..)` only accepts field accessors");
    }

    #[test]
    fn named_builder() {
        let decl = Declaration::named(elements(quote::quote!("x", x, "y", y))).unwrap();
        assert_eq!(decl.shape, Shape::Named);
        assert_eq!(decl.fields.len(), 2);

        assert_eq!(Declaration::named(Vec::new()).unwrap(), Declaration::empty());
        assert!(Declaration::named(elements(quote::quote!(x, y))).is_err());
    }

    #[test]
    fn duplicate_names() {
        let err = Declaration::named(elements(quote::quote!("x", x, "x", y))).unwrap_err();
        assert_eq!(err.to_string(), "duplicate field name `x`");

        // Two names may share an accessor.
        assert!(Declaration::named(elements(quote::quote!("x", x, "alias", x))).is_ok());
    }

    #[test]
    fn classify_dispatches_on_shape() {
        let decl = Declaration::classify(elements(quote::quote!(a, b))).unwrap();
        assert_eq!(decl.shape, Shape::Positional);

        let decl = Declaration::classify(elements(quote::quote!("a", a))).unwrap();
        assert_eq!(decl.shape, Shape::Named);

        assert!(Declaration::classify(elements(quote::quote!("a", a, b))).is_err());
    }

    #[test]
    fn idempotent() {
        let tokens = quote::quote!("x", x, doc("horizontal"), "y", y);
        let first = Declaration::classify(elements(tokens.clone())).unwrap();
        let second = Declaration::classify(elements(tokens)).unwrap();
        assert_eq!(first, second);
    }
}
