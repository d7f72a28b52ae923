use syn::spanned::Spanned;
use syn::{Attribute, Expr, Lit, LitStr, Meta};

/// Documentation of a type or field.
///
/// Collects `#[doc = "..."]` (including `///`) by default. A
/// `#[meta(doc = "...")]` replaces the collected lines, `#[meta(doc = false)]`
/// drops them.
#[derive(Debug, Default)]
pub(crate) struct MetaDocs {
    disabled: bool,
    is_custom: bool,
    lines: Vec<String>,
}

impl MetaDocs {
    /// Collects plain `#[doc = ".."]` attributes.
    pub fn collect(&mut self, attrs: &[Attribute]) -> syn::Result<()> {
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("doc")) {
            let Meta::NameValue(pair) = &attr.meta else {
                continue;
            };
            match &pair.value {
                Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(lit), ..
                }) => {
                    if !self.is_custom {
                        self.lines.push(strip_doc_space(lit.value()));
                    }
                }
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "`#[doc = ...]` expected a string literal value",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Handles `doc = "..."` or `doc = false` inside `#[meta(..)]`.
    pub fn parse_custom(&mut self, lit: &Lit) -> syn::Result<()> {
        match lit {
            Lit::Str(lit) => {
                if !self.is_custom {
                    self.lines.clear();
                    self.is_custom = true;
                }
                self.lines.push(lit.value());
                Ok(())
            }
            Lit::Bool(flag) if !flag.value() => {
                self.disabled = true;
                Ok(())
            }
            Lit::Bool(flag) => Err(syn::Error::new(
                flag.span(),
                "explicit `true` is invalid, docs are collected by default",
            )),
            other => Err(syn::Error::new(
                other.span(),
                "expected a string or `false` literal",
            )),
        }
    }

    /// Lines joined with `\n`, `None` when disabled or blank.
    pub fn doc_string(&self) -> Option<String> {
        if self.disabled || self.lines.iter().all(|line| line.trim().is_empty()) {
            return None;
        }
        Some(self.lines.join("\n"))
    }

    /// The joined docs as a `doc("...")` literal.
    pub fn to_lit(&self, span: proc_macro2::Span) -> Option<LitStr> {
        self.doc_string().map(|doc| LitStr::new(&doc, span))
    }
}

// `/// text` arrives as `" text"`.
fn strip_doc_space(line: String) -> String {
    match line.strip_prefix(' ') {
        Some(rest) => rest.to_owned(),
        None => line,
    }
}
