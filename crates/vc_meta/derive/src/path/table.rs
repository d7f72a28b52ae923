use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn accessor_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::table::Accessor
    }
}
