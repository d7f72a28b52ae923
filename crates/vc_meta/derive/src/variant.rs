//! Deduplication of field types into accessor-variant cases.

use std::collections::HashMap;

use proc_macro2::Span;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{GenericArgument, Ident, PathArguments, Type};

/// One distinct field type.
#[derive(Debug, Clone)]
pub(crate) struct VariantCase {
    pub ident: Ident,
    pub ty: Type,
    /// Ordinals of the fields mapped to this case, ascending.
    pub ordinals: Vec<usize>,
}

/// Distinct field types in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub(crate) struct VariantSet {
    cases: Vec<VariantCase>,
    case_of: Vec<usize>,
}

impl VariantSet {
    /// Builds the set from field types in declaration order.
    ///
    /// Types are compared by their written tokens, so `String` and
    /// `alloc::string::String` are two cases.
    pub fn build<'a>(types: impl IntoIterator<Item = &'a Type>) -> Self {
        let mut set = Self::default();
        let mut by_key: HashMap<String, usize> = HashMap::new();
        let mut idents: HashMap<String, usize> = HashMap::new();

        for (ordinal, ty) in types.into_iter().enumerate() {
            let case = *by_key.entry(type_key(ty)).or_insert_with(|| {
                let base = case_name(ty);
                let count = idents.entry(base.clone()).or_insert(0);
                *count += 1;
                let name = match *count {
                    1 => base,
                    n => format!("{base}{n}"),
                };
                set.cases.push(VariantCase {
                    ident: Ident::new(&name, Span::call_site()),
                    ty: ty.clone(),
                    ordinals: Vec::new(),
                });
                set.cases.len() - 1
            });
            set.cases[case].ordinals.push(ordinal);
            set.case_of.push(case);
        }

        set
    }

    #[inline]
    pub fn cases(&self) -> &[VariantCase] {
        &self.cases
    }

    /// The case index of the field at `ordinal`.
    #[inline]
    pub fn case_of(&self, ordinal: usize) -> usize {
        self.case_of[ordinal]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

fn type_key(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// `Vec<u8>` -> `VecU8`, `&str` -> `RefStr`, `[f32; 3]` -> `ArrayF32`.
fn case_name(ty: &Type) -> String {
    let mut name = String::new();
    push_case_name(ty, &mut name);
    if name.is_empty() {
        name.push_str("Field");
    }
    name
}

fn push_case_name(ty: &Type, out: &mut String) {
    match ty {
        Type::Path(path) => {
            let Some(last) = path.path.segments.last() else {
                return;
            };
            push_capitalized(&last.ident.unraw().to_string(), out);
            if let PathArguments::AngleBracketed(args) = &last.arguments {
                for arg in &args.args {
                    if let GenericArgument::Type(inner) = arg {
                        push_case_name(inner, out);
                    }
                }
            }
        }
        Type::Reference(reference) => {
            out.push_str(if reference.mutability.is_some() { "Mut" } else { "Ref" });
            push_case_name(&reference.elem, out);
        }
        Type::Array(array) => {
            out.push_str("Array");
            push_case_name(&array.elem, out);
        }
        Type::Slice(slice) => {
            out.push_str("Slice");
            push_case_name(&slice.elem, out);
        }
        Type::Tuple(tuple) if tuple.elems.is_empty() => out.push_str("Unit"),
        Type::Tuple(tuple) => {
            out.push_str("Tuple");
            tuple.elems.iter().for_each(|elem| push_case_name(elem, out));
        }
        Type::Paren(paren) => push_case_name(&paren.elem, out),
        Type::Group(group) => push_case_name(&group.elem, out),
        _ => out.push_str("Field"),
    }
}

fn push_capitalized(word: &str, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::{VariantSet, case_name};
    use syn::Type;

    fn types(list: &[&str]) -> Vec<Type> {
        list.iter().map(|s| syn::parse_str(s).unwrap()).collect()
    }

    #[test]
    fn deduplicates_in_first_occurrence_order() {
        let types = types(&["i32", "String", "i32", "bool", "String"]);
        let set = VariantSet::build(&types);

        let idents: Vec<String> = set.cases().iter().map(|c| c.ident.to_string()).collect();
        assert_eq!(idents, ["I32", "String", "Bool"]);

        let mapping: Vec<usize> = (0..5).map(|i| set.case_of(i)).collect();
        assert_eq!(mapping, [0, 1, 0, 2, 1]);

        assert_eq!(set.cases()[0].ordinals, [0, 2]);
        assert_eq!(set.cases()[1].ordinals, [1, 4]);
    }

    #[test]
    fn empty_input() {
        let set = VariantSet::build(&[]);
        assert!(set.is_empty());
    }

    #[test]
    fn whitespace_does_not_split_cases() {
        let types = types(&["Vec<u8>", "Vec < u8 >"]);
        assert_eq!(VariantSet::build(&types).cases().len(), 1);
    }

    #[test]
    fn case_names() {
        let name = |s: &str| case_name(&syn::parse_str(s).unwrap());
        assert_eq!(name("Vec<u8>"), "VecU8");
        assert_eq!(name("Option<Box<str>>"), "OptionBoxStr");
        assert_eq!(name("&'static str"), "RefStr");
        assert_eq!(name("[f32; 3]"), "ArrayF32");
        assert_eq!(name("(u8, bool)"), "TupleU8Bool");
        assert_eq!(name("()"), "Unit");
        assert_eq!(name("std::collections::HashMap<String, i64>"), "HashMapStringI64");
        assert_eq!(name("r#type"), "Type");
    }

    #[test]
    fn colliding_names_get_suffixes() {
        let types = types(&["Vec<u8>", "std::vec::Vec<u8>", "[u8; 4]", "[u8; 8]"]);
        let set = VariantSet::build(&types);
        let idents: Vec<String> = set.cases().iter().map(|c| c.ident.to_string()).collect();
        assert_eq!(idents, ["VecU8", "VecU82", "ArrayU8", "ArrayU82"]);
    }
}
