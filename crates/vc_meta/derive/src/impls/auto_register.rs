use crate::derive_data::MetaStruct;

/// Submits the type to the static registry when `#[meta(auto_register)]`
/// is present. Generic types are skipped, their instantiations are unknown.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(info: &MetaStruct) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = info.attrs().auto_register else {
        return crate::utils::empty();
    };
    if info.impl_with_generic() {
        return crate::utils::empty();
    }

    let auto_register_ = crate::path::auto_register_(info.vc_meta_path());
    let real_ident = info.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#real_ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &MetaStruct) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
