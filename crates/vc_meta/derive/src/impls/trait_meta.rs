use proc_macro2::TokenStream;
use quote::quote;

use crate::decl::Shape;
use crate::derive_data::MetaStruct;
use crate::path::fp::{InfallibleFP, OptionFP};

/// The `Meta` impl: shape, variant types, the three tables and `type_info`.
pub(crate) fn impl_trait_meta(info: &MetaStruct) -> TokenStream {
    let vc_meta_path = info.vc_meta_path();
    let meta_ = crate::path::meta_(vc_meta_path);
    let shape_ = crate::path::shape_(vc_meta_path);
    let type_info_ = crate::path::type_info_(vc_meta_path);
    let accessor_ = crate::path::accessor_(vc_meta_path);

    let real_ident = info.ident();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = info.meta_where_clause();

    let shape = match info.shape() {
        Shape::Named => quote!(#shape_::Named),
        Shape::Positional => quote!(#shape_::Positional),
    };
    let field_count = info.fields().len();

    let (accessor_ty, field_ref_ty, field_mut_ty) = if info.variants().is_empty() {
        (
            quote!(#InfallibleFP),
            quote!(#InfallibleFP),
            quote!(#InfallibleFP),
        )
    } else {
        let pointer_generics = info.pointer_generics();
        let (_, pointer_ty_generics, _) = pointer_generics.split_for_impl();
        let accessor_ident = info.accessor_ident();
        let field_ref_ident = info.field_ref_ident();
        let field_mut_ident = info.field_mut_ident();
        (
            quote!(#accessor_ident #ty_generics),
            quote!(#field_ref_ident #pointer_ty_generics),
            quote!(#field_mut_ident #pointer_ty_generics),
        )
    };

    let mut accessors = Vec::with_capacity(field_count);
    let mut fields_ref = Vec::with_capacity(field_count);
    let mut fields_mut = Vec::with_capacity(field_count);

    for (index, field) in info.fields().iter().enumerate() {
        let case = &info.variants().cases()[info.variants().case_of(index)].ident;
        let member = &field.member;
        let name = match &field.name {
            Some(name) => quote!(#OptionFP::Some(#name)),
            None => quote!(#OptionFP::None),
        };
        let accessor_ident = info.accessor_ident();
        let field_ref_ident = info.field_ref_ident();
        let field_mut_ident = info.field_mut_ident();

        accessors.push(quote! {
            #accessor_ident::#case(#accessor_::new(
                #index,
                #name,
                |value| &value.#member,
                |value| &mut value.#member,
            ))
        });
        fields_ref.push(quote!(|value| #field_ref_ident::#case(&value.#member)));
        fields_mut.push(quote!(|value| #field_mut_ident::#case(&mut value.#member)));
    }

    let type_info_tokens = type_info_tokens(info);
    let cell_tokens = if info.impl_with_generic() {
        let info_cell = crate::path::generic_info_cell_(vc_meta_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_info_cell_(vc_meta_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    quote! {
        impl #impl_generics #meta_ for #real_ident #ty_generics #where_clause {
            const SHAPE: #shape_ = #shape;
            const FIELD_COUNT: usize = #field_count;

            type Accessor = #accessor_ty;
            type FieldRef<'a> = #field_ref_ty;
            type FieldMut<'a> = #field_mut_ty;

            const ACCESSORS: &'static [#accessor_ty] = &[
                #(#accessors,)*
            ];

            const FIELDS_REF: &'static [for<'a> fn(&'a Self) -> #field_ref_ty] = &[
                #(#fields_ref,)*
            ];

            const FIELDS_MUT: &'static [for<'a> fn(&'a mut Self) -> #field_mut_ty] = &[
                #(#fields_mut,)*
            ];

            fn type_info() -> &'static #type_info_ {
                #cell_tokens
            }
        }
    }
}

/// The expression building the type's `TypeInfo`.
fn type_info_tokens(info: &MetaStruct) -> TokenStream {
    let vc_meta_path = info.vc_meta_path();
    let type_info_ = crate::path::type_info_(vc_meta_path);
    let field_descriptor_ = crate::path::field_descriptor_(vc_meta_path);
    let variant_case_ = crate::path::variant_case_(vc_meta_path);

    let fields = info.fields().iter().enumerate().map(|(index, field)| {
        let ty = &field.ty;
        let case = info.variants().case_of(index);
        let constructor = match &field.name {
            Some(name) => quote!(#field_descriptor_::named::<#ty>(#index, #name)),
            None => quote!(#field_descriptor_::positional::<#ty>(#index)),
        };
        let with_docs = match &field.doc {
            Some(doc) => quote!(.with_docs(#OptionFP::Some(#doc))),
            None => crate::utils::empty(),
        };
        quote! {
            #constructor.with_case(#case)#with_docs
        }
    });

    let cases = info.variants().cases().iter().map(|case| {
        let ty = &case.ty;
        let ident = case.ident.to_string();
        let ordinals = &case.ordinals;
        quote! {
            #variant_case_::new::<#ty>(#ident, &[#(#ordinals),*])
        }
    });

    let ident = info.ident().to_string();
    let with_docs = match info.docs() {
        Some(doc) => quote!(.with_docs(#OptionFP::Some(#doc))),
        None => crate::utils::empty(),
    };

    let (variant, info_) = match info.shape() {
        Shape::Named => (quote!(Named), crate::path::named_info_(vc_meta_path)),
        Shape::Positional => (quote!(Positional), crate::path::positional_info_(vc_meta_path)),
    };

    quote! {
        #type_info_::#variant(
            #info_::new::<Self>(
                #ident,
                &[ #(#fields,)* ],
                &[ #(#cases,)* ],
            )
            #with_docs
        )
    }
}
