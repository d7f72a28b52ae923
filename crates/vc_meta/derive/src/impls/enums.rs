use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MetaStruct;
use crate::path::fp::{CloneFP, CopyFP, DebugFP, FmtFP, OptionFP};

/// Definitions of `{T}Accessor`, `{T}FieldRef<'a>` and `{T}FieldMut<'a>`.
///
/// Emitted next to the type, outside the `const _` block. A type without
/// fields gets no enums, its `Meta` impl uses `Infallible` instead.
pub(crate) fn define_variant_enums(info: &MetaStruct) -> TokenStream {
    if info.variants().is_empty() {
        return crate::utils::empty();
    }

    let accessor_ = crate::path::accessor_(info.vc_meta_path());
    let vis = info.vis();
    let real_ident = info.ident();
    let (_, ty_generics, _) = info.generics().split_for_impl();
    let generics = info.generics();
    let where_clause = &generics.where_clause;
    let pointer_generics = info.pointer_generics();
    let pointer_where = &pointer_generics.where_clause;

    let accessor_ident = info.accessor_ident();
    let field_ref_ident = info.field_ref_ident();
    let field_mut_ident = info.field_mut_ident();

    let cases = info.variants().cases();
    let case_idents = cases.iter().map(|case| &case.ident).collect::<Vec<_>>();
    let case_types = cases.iter().map(|case| &case.ty).collect::<Vec<_>>();

    let accessor_doc = format!(
        "Describes one field of [`{real_ident}`], one case per distinct field type."
    );
    let field_ref_doc = format!("A shared reference to one field of a [`{real_ident}`].");
    let field_mut_doc = format!("A mutable reference to one field of a [`{real_ident}`].");

    quote! {
        #[doc = #accessor_doc]
        #[allow(clippy::enum_variant_names)]
        #vis enum #accessor_ident #generics #where_clause {
            #( #case_idents(#accessor_<#real_ident #ty_generics, #case_types>), )*
        }

        #[doc = #field_ref_doc]
        #[allow(clippy::enum_variant_names)]
        #vis enum #field_ref_ident #pointer_generics #pointer_where {
            #( #case_idents(&'a #case_types), )*
        }

        #[doc = #field_mut_doc]
        #[allow(clippy::enum_variant_names)]
        #vis enum #field_mut_ident #pointer_generics #pointer_where {
            #( #case_idents(&'a mut #case_types), )*
        }
    }
}

/// `Clone`, `Copy`, `Debug` and the inherent helpers of the variant enums.
pub(crate) fn impl_variant_enums(info: &MetaStruct) -> TokenStream {
    if info.variants().is_empty() {
        return crate::utils::empty();
    }

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.generics().split_for_impl();
    let pointer_generics = info.pointer_generics();
    let (pointer_impl_generics, pointer_ty_generics, pointer_where) =
        pointer_generics.split_for_impl();

    let accessor_ident = info.accessor_ident();
    let field_ref_ident = info.field_ref_ident();
    let field_mut_ident = info.field_mut_ident();

    let case_idents = info
        .variants()
        .cases()
        .iter()
        .map(|case| &case.ident)
        .collect::<Vec<_>>();
    let case_names = case_idents
        .iter()
        .map(|ident| ident.to_string())
        .collect::<Vec<_>>();

    quote! {
        #[automatically_derived]
        impl #impl_generics #CloneFP for #accessor_ident #ty_generics #where_clause {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        #[automatically_derived]
        impl #impl_generics #CopyFP for #accessor_ident #ty_generics #where_clause {}

        #[automatically_derived]
        impl #impl_generics #DebugFP for #accessor_ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut #FmtFP::Formatter<'_>) -> #FmtFP::Result {
                match self {
                    #( Self::#case_idents(accessor) => f.debug_tuple(#case_names).field(accessor).finish(), )*
                }
            }
        }

        impl #impl_generics #accessor_ident #ty_generics #where_clause {
            /// Ordinal of the described field.
            #[inline]
            pub const fn index(&self) -> usize {
                match self {
                    #( Self::#case_idents(accessor) => accessor.index(), )*
                }
            }

            /// Declared name of the described field, `None` for positional types.
            #[inline]
            pub const fn name(&self) -> #OptionFP<&'static str> {
                match self {
                    #( Self::#case_idents(accessor) => accessor.name(), )*
                }
            }

            /// Applies the accessor to `value`.
            #[inline]
            pub fn get<'a>(&self, value: &'a #real_ident #ty_generics) -> #field_ref_ident #pointer_ty_generics {
                match self {
                    #( Self::#case_idents(accessor) => #field_ref_ident::#case_idents(accessor.get(value)), )*
                }
            }

            /// Applies the accessor to `value`, mutably.
            #[inline]
            pub fn get_mut<'a>(&self, value: &'a mut #real_ident #ty_generics) -> #field_mut_ident #pointer_ty_generics {
                match self {
                    #( Self::#case_idents(accessor) => #field_mut_ident::#case_idents(accessor.get_mut(value)), )*
                }
            }
        }

        #[automatically_derived]
        impl #pointer_impl_generics #CloneFP for #field_ref_ident #pointer_ty_generics #pointer_where {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        #[automatically_derived]
        impl #pointer_impl_generics #CopyFP for #field_ref_ident #pointer_ty_generics #pointer_where {}

        // Field types need not be `Debug`, only the case is printed.
        #[automatically_derived]
        impl #pointer_impl_generics #DebugFP for #field_ref_ident #pointer_ty_generics #pointer_where {
            fn fmt(&self, f: &mut #FmtFP::Formatter<'_>) -> #FmtFP::Result {
                match self {
                    #( Self::#case_idents(_) => f.debug_tuple(#case_names).finish_non_exhaustive(), )*
                }
            }
        }

        #[automatically_derived]
        impl #pointer_impl_generics #DebugFP for #field_mut_ident #pointer_ty_generics #pointer_where {
            fn fmt(&self, f: &mut #FmtFP::Formatter<'_>) -> #FmtFP::Result {
                match self {
                    #( Self::#case_idents(_) => f.debug_tuple(#case_names).finish_non_exhaustive(), )*
                }
            }
        }
    }
}
