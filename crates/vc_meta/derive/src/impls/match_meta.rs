use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::MetaStruct;

pub(crate) fn match_meta_impls(ast: DeriveInput) -> TokenStream {
    let info = match MetaStruct::new(&ast) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };
    expand(&info).into()
}

pub(crate) fn expand(info: &MetaStruct) -> proc_macro2::TokenStream {
    let enum_definitions = super::define_variant_enums(info);
    let enum_impls = super::impl_variant_enums(info);
    let classify_impl = super::impl_trait_classify(info);
    let meta_impl = super::impl_trait_meta(info);
    let auto_register = super::get_auto_register_impl(info);

    quote! {
        #enum_definitions

        const _: () = {
            #enum_impls

            #classify_impl

            #meta_impl

            #auto_register
        };
    }
}
