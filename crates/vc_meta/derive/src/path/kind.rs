use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn classify_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::kind::Classify
    }
}

#[inline(always)]
pub(crate) fn type_kind_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::kind::TypeKind
    }
}
