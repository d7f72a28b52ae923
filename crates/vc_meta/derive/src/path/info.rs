use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn shape_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::info::Shape
    }
}

#[inline(always)]
pub(crate) fn type_info_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn named_info_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::info::NamedInfo
    }
}

#[inline(always)]
pub(crate) fn positional_info_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::info::PositionalInfo
    }
}

#[inline(always)]
pub(crate) fn field_descriptor_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::info::FieldDescriptor
    }
}

#[inline(always)]
pub(crate) fn variant_case_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::info::VariantCase
    }
}

#[inline(always)]
pub(crate) fn non_generic_info_cell_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::impls::NonGenericInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_info_cell_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::impls::GenericInfoCell
    }
}
