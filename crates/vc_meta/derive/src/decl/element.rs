use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Ident, LitStr, Member, Token, parenthesized};

/// One entry of a metadata declaration.
///
/// - `"name"`: a field name, opens a new field group.
/// - `field` / `0`: an accessor to a field of the annotated type.
/// - `doc("...")`: documentation attached to the current group.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Element {
    Name(LitStr),
    Accessor(Member),
    Doc(LitStr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Name,
    Accessor,
    Doc,
}

impl Element {
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Name(_) => ElementKind::Name,
            Element::Accessor(_) => ElementKind::Accessor,
            Element::Doc(_) => ElementKind::Doc,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Element::Name(lit) | Element::Doc(lit) => lit.span(),
            Element::Accessor(member) => member.span(),
        }
    }

    /// Parses a comma separated element list, trailing comma allowed.
    pub fn parse_list(input: ParseStream) -> syn::Result<Vec<Element>> {
        let list = Punctuated::<Element, Token![,]>::parse_terminated(input)?;
        Ok(list.into_iter().collect())
    }
}

impl Parse for Element {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Element::Name(input.parse()?));
        }

        if input.peek(Ident) && input.peek2(syn::token::Paren) {
            let ident: Ident = input.parse()?;
            if ident != "doc" {
                return Err(syn::Error::new(
                    ident.span(),
                    "expected a field name, a field accessor or `doc(\"...\")`",
                ));
            }
            let content;
            parenthesized!(content in input);
            let doc: LitStr = content.parse()?;
            if !content.is_empty() {
                return Err(content.error("`doc(..)` takes a single string literal"));
            }
            return Ok(Element::Doc(doc));
        }

        if input.peek(Ident) || input.peek(syn::LitInt) {
            return Ok(Element::Accessor(input.parse()?));
        }

        Err(input.error("expected a field name, a field accessor or `doc(\"...\")`"))
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, ElementKind};
    use syn::parse::Parser;

    fn kinds(tokens: proc_macro2::TokenStream) -> Vec<ElementKind> {
        Element::parse_list
            .parse2(tokens)
            .unwrap()
            .iter()
            .map(Element::kind)
            .collect()
    }

    #[test]
    fn classifies_syntactically() {
        use ElementKind::*;
        assert_eq!(
            kinds(quote::quote!("x", x, doc("first"), 0, "doc", doc)),
            [Name, Accessor, Doc, Accessor, Name, Accessor]
        );
        assert!(kinds(quote::quote!()).is_empty());
    }

    #[test]
    fn rejects_other_calls() {
        assert!(Element::parse_list.parse2(quote::quote!(x, note("a"))).is_err());
        assert!(Element::parse_list.parse2(quote::quote!(doc("a", "b"))).is_err());
        assert!(Element::parse_list.parse2(quote::quote!(1.5)).is_err());
    }
}
