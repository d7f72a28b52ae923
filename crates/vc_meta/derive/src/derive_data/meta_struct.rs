use proc_macro2::{Span, TokenStream, TokenTree};
use quote::{ToTokens, format_ident, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, LitStr, Member, Type};

use super::{DeclKind, FieldAttributes, TypeAttributes};
use crate::decl::{Declaration, Element, FieldDecl, Shape};
use crate::variant::VariantSet;

/// A declared field resolved against the struct definition.
#[derive(Debug)]
pub(crate) struct ResolvedField {
    pub name: Option<LitStr>,
    pub member: Member,
    pub ty: Type,
    pub doc: Option<LitStr>,
}

/// Everything the code generators need about one `#[derive(Meta)]` struct.
pub(crate) struct MetaStruct<'a> {
    vc_meta_path: syn::Path,
    ast: &'a DeriveInput,
    attrs: TypeAttributes,
    shape: Shape,
    fields: Vec<ResolvedField>,
    variants: VariantSet,
}

impl core::fmt::Debug for MetaStruct<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetaStruct")
            .field("vc_meta_path", &self.vc_meta_path.to_token_stream())
            .field("ident", &self.ast.ident)
            .field("shape", &self.shape)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<'a> MetaStruct<'a> {
    pub fn new(ast: &'a DeriveInput) -> syn::Result<Self> {
        Self::with_path(ast, crate::path::vc_meta())
    }

    pub fn with_path(ast: &'a DeriveInput, vc_meta_path: syn::Path) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Meta` can only be derived for structs",
            ));
        };

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Meta` types must be `'static`, lifetime parameters are not supported",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let struct_fields = data
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let member = match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(syn::Index {
                        index: index as u32,
                        span: field.ty.span(),
                    }),
                };
                FieldAttributes::parse_attrs(&field.attrs).map(|attrs| (member, &field.ty, attrs))
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let declaration = match &attrs.declaration {
            Some(explicit) => {
                if let Some(span) = struct_fields.iter().find_map(|(_, _, attrs)| attrs.span) {
                    return Err(syn::Error::new(
                        span,
                        "field attributes have no effect with an explicit declaration",
                    ));
                }
                match explicit.kind {
                    DeclKind::Object => Declaration::named(explicit.elements.clone())?,
                    DeclKind::Array => Declaration::positional(explicit.elements.clone())?,
                }
            }
            None => {
                let positional =
                    attrs.positional.is_some() || !matches!(data.fields, Fields::Named(_));
                Declaration::classify(synthesize(&struct_fields, positional))?
            }
        };

        let fields = declaration
            .fields
            .into_iter()
            .map(|decl| resolve(decl, &struct_fields, &ast.ident))
            .collect::<syn::Result<Vec<_>>>()?;

        check_generics(&ast.generics, &fields)?;

        let variants = VariantSet::build(fields.iter().map(|field| &field.ty));

        Ok(Self {
            vc_meta_path,
            ast,
            attrs,
            shape: declaration.shape,
            fields,
            variants,
        })
    }

    #[inline]
    pub fn vc_meta_path(&self) -> &syn::Path {
        &self.vc_meta_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn fields(&self) -> &[ResolvedField] {
        &self.fields
    }

    #[inline]
    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        &self.ast.ident
    }

    #[inline]
    pub fn vis(&self) -> &syn::Visibility {
        &self.ast.vis
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        &self.ast.generics
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.ast.generics.params.is_empty()
    }

    pub fn accessor_ident(&self) -> Ident {
        format_ident!("{}Accessor", self.ast.ident)
    }

    pub fn field_ref_ident(&self) -> Ident {
        format_ident!("{}FieldRef", self.ast.ident)
    }

    pub fn field_mut_ident(&self) -> Ident {
        format_ident!("{}FieldMut", self.ast.ident)
    }

    /// Generics of the pointer enums: `'a` in front of the type's own.
    pub fn pointer_generics(&self) -> Generics {
        let mut generics = self.ast.generics.clone();
        generics.params.insert(
            0,
            GenericParam::Lifetime(syn::LifetimeParam::new(syn::Lifetime::new(
                "'a",
                Span::call_site(),
            ))),
        );
        generics
    }

    /// `T: 'static` for type parameters and `F: Classify + 'static` for
    /// generic field types, appended to the type's own where clause.
    pub fn meta_where_clause(&self) -> TokenStream {
        let classify_ = crate::path::classify_(&self.vc_meta_path);
        let own = self
            .ast
            .generics
            .where_clause
            .as_ref()
            .map(|clause| clause.predicates.iter().collect::<Vec<_>>())
            .unwrap_or_default();

        if !self.impl_with_generic() {
            if own.is_empty() {
                return crate::utils::empty();
            }
            return quote!(where #(#own,)*);
        }

        let params = self.ast.generics.type_params().map(|param| &param.ident);
        let field_types = self.variants.cases().iter().map(|case| &case.ty);

        quote! {
            where
                #(#own,)*
                #(#params: 'static,)*
                #(#field_types: #classify_ + 'static,)*
        }
    }

    /// The doc string of the type, if any.
    #[inline]
    pub fn docs(&self) -> Option<String> {
        self.attrs.docs.doc_string()
    }
}

/// Builds the declaration a struct gets without `object(..)` / `array(..)`.
fn synthesize(fields: &[(Member, &Type, FieldAttributes)], positional: bool) -> Vec<Element> {
    let mut elements = Vec::new();
    for (member, _, attrs) in fields.iter().filter(|(_, _, attrs)| !attrs.skip) {
        if positional {
            elements.push(Element::Accessor(member.clone()));
            continue;
        }
        let name = match (&attrs.rename, member) {
            (Some(rename), _) => rename.clone(),
            (None, Member::Named(ident)) => LitStr::new(&ident.unraw().to_string(), ident.span()),
            (None, Member::Unnamed(index)) => LitStr::new(&index.index.to_string(), index.span),
        };
        let span = name.span();
        elements.push(Element::Name(name));
        elements.push(Element::Accessor(member.clone()));
        if let Some(doc) = attrs.docs.to_lit(span) {
            elements.push(Element::Doc(doc));
        }
    }
    elements
}

fn resolve(
    decl: FieldDecl,
    fields: &[(Member, &Type, FieldAttributes)],
    ident: &Ident,
) -> syn::Result<ResolvedField> {
    let Some((_, ty, _)) = fields.iter().find(|(member, _, _)| *member == decl.member) else {
        return Err(syn::Error::new(
            decl.member.span(),
            format!(
                "no field `{}` on type `{ident}`",
                crate::utils::member_text(&decl.member)
            ),
        ));
    };

    Ok(ResolvedField {
        name: decl.name,
        member: decl.member,
        ty: (*ty).clone(),
        doc: decl.doc,
    })
}

/// Every type and const parameter must appear in some declared field type,
/// the emitted pointer enums would not use it otherwise.
fn check_generics(generics: &Generics, fields: &[ResolvedField]) -> syn::Result<()> {
    let idents = generics.params.iter().filter_map(|param| match param {
        GenericParam::Type(param) => Some(&param.ident),
        GenericParam::Const(param) => Some(&param.ident),
        GenericParam::Lifetime(_) => None,
    });

    for ident in idents {
        if !fields
            .iter()
            .any(|field| mentions(field.ty.to_token_stream(), ident))
        {
            return Err(syn::Error::new(
                ident.span(),
                format!("generic parameter `{ident}` is not used by any declared field"),
            ));
        }
    }
    Ok(())
}

fn mentions(tokens: TokenStream, ident: &Ident) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(found) => found == *ident,
        TokenTree::Group(group) => mentions(group.stream(), ident),
        _ => false,
    })
}
