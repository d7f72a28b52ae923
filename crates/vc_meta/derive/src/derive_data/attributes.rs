//! `#[meta(..)]` attributes on the type and on its fields.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Lit, LitStr, parenthesized};

use super::MetaDocs;
use crate::META_ATTRIBUTE_NAME;
use crate::decl::Element;

/// Which builder an explicit declaration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeclKind {
    /// `#[meta(object(..))]`
    Object,
    /// `#[meta(array(..))]`
    Array,
}

#[derive(Debug)]
pub(crate) struct ExplicitDecl {
    pub kind: DeclKind,
    pub elements: Vec<Element>,
    pub span: Span,
}

/// Type level attributes.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub declaration: Option<ExplicitDecl>,
    pub positional: Option<Span>,
    pub auto_register: Option<Span>,
    pub docs: MetaDocs,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        this.docs.collect(attrs)?;

        for attr in attrs
            .iter()
            .filter(|attr| attr.path().is_ident(META_ATTRIBUTE_NAME))
        {
            attr.parse_nested_meta(|meta| this.parse_item(meta))?;
        }

        if let (Some(decl), Some(_)) = (&this.declaration, this.positional) {
            return Err(syn::Error::new(
                decl.span,
                "`positional` conflicts with an explicit declaration",
            ));
        }

        Ok(this)
    }

    fn parse_item(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.get_ident().map_or_else(Span::call_site, |i| i.span());

        let kind = if meta.path.is_ident("object") {
            Some(DeclKind::Object)
        } else if meta.path.is_ident("array") {
            Some(DeclKind::Array)
        } else {
            None
        };

        if let Some(kind) = kind {
            if self.declaration.is_some() {
                return Err(meta.error("only one `object(..)` or `array(..)` declaration is allowed"));
            }
            let content;
            parenthesized!(content in meta.input);
            self.declaration = Some(ExplicitDecl {
                kind,
                elements: Element::parse_list(&content)?,
                span,
            });
            return Ok(());
        }

        if meta.path.is_ident("positional") {
            self.positional = Some(span);
            return Ok(());
        }

        if meta.path.is_ident("auto_register") {
            self.auto_register = Some(span);
            return Ok(());
        }

        if meta.path.is_ident("doc") {
            let lit: Lit = meta.value()?.parse()?;
            return self.docs.parse_custom(&lit);
        }

        Err(meta.error(
            "expected one of `object(..)`, `array(..)`, `positional`, `auto_register`, `doc`",
        ))
    }
}

/// Field level attributes, only read for synthesized declarations.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub skip: bool,
    pub docs: MetaDocs,
    /// Span of the first `#[meta(..)]` on the field.
    pub span: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        this.docs.collect(attrs)?;

        for attr in attrs
            .iter()
            .filter(|attr| attr.path().is_ident(META_ATTRIBUTE_NAME))
        {
            this.span.get_or_insert(attr.span());
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    this.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("doc") {
                    let lit: Lit = meta.value()?.parse()?;
                    this.docs.parse_custom(&lit)
                } else {
                    Err(meta.error("expected one of `rename`, `skip`, `doc`"))
                }
            })?;
        }

        Ok(this)
    }
}

#[cfg(test)]
mod tests {
    use super::{DeclKind, FieldAttributes, TypeAttributes};
    use syn::{Attribute, parse_quote};

    #[test]
    fn explicit_declaration() {
        let attrs: Vec<Attribute> = parse_quote! {
            /// A point.
            #[meta(object("x", x, doc("horizontal"), "y", y), auto_register)]
        };
        let parsed = TypeAttributes::parse_attrs(&attrs).unwrap();
        let decl = parsed.declaration.unwrap();
        assert_eq!(decl.kind, DeclKind::Object);
        assert_eq!(decl.elements.len(), 5);
        assert!(parsed.auto_register.is_some());
        assert_eq!(parsed.docs.doc_string().unwrap(), "A point.");
    }

    #[test]
    fn conflicting_type_attributes() {
        let attrs: Vec<Attribute> = parse_quote!(#[meta(array(x), object("x", x))]);
        assert!(TypeAttributes::parse_attrs(&attrs).is_err());

        let attrs: Vec<Attribute> = parse_quote!(#[meta(positional, array(x))]);
        assert!(TypeAttributes::parse_attrs(&attrs).is_err());

        let attrs: Vec<Attribute> = parse_quote!(#[meta(tag = "x")]);
        assert!(TypeAttributes::parse_attrs(&attrs).is_err());
    }

    #[test]
    fn field_attributes() {
        let attrs: Vec<Attribute> = parse_quote!(#[meta(rename = "type", doc = "kind tag")]);
        let parsed = FieldAttributes::parse_attrs(&attrs).unwrap();
        assert_eq!(parsed.rename.unwrap().value(), "type");
        assert_eq!(parsed.docs.doc_string().unwrap(), "kind tag");
        assert!(!parsed.skip);
        assert!(parsed.span.is_some());

        let attrs: Vec<Attribute> = parse_quote!(#[meta(skip)]);
        assert!(FieldAttributes::parse_attrs(&attrs).unwrap().skip);
    }
}
