use proc_macro2::TokenStream;
use quote::quote;

use crate::decl::Shape;
use crate::derive_data::MetaStruct;

/// `Classify` with `KIND` set from the declaration shape.
pub(crate) fn impl_trait_classify(info: &MetaStruct) -> TokenStream {
    let vc_meta_path = info.vc_meta_path();
    let classify_ = crate::path::classify_(vc_meta_path);
    let type_kind_ = crate::path::type_kind_(vc_meta_path);

    let kind = match info.shape() {
        Shape::Named => quote!(#type_kind_::Named),
        Shape::Positional => quote!(#type_kind_::Positional),
    };

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.generics().split_for_impl();

    quote! {
        impl #impl_generics #classify_ for #real_ident #ty_generics #where_clause {
            const KIND: #type_kind_ = #kind;
        }
    }
}
