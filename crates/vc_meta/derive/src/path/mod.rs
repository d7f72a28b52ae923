//! Paths of the `vc_meta` items the generated code names.
//!
//! Kept in one place so a move in `vc_meta` only touches this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The path of the `vc_meta` crate as seen from the caller.
///
/// 1. Crates depending on `vc_meta` get `::vc_meta`.
/// 2. Crates depending on `vc_schema` get `::vc_schema::meta`.
/// 3. Otherwise `::vc_meta`, which may be wrong.
///
/// This reads the caller's `Cargo.toml`, so it runs once per expansion and
/// the result is passed around.
pub(crate) fn vc_meta() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_meta"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod kind;
mod table;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use kind::*;
pub(crate) use table::*;

#[inline(always)]
pub(crate) fn meta_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::Meta
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::__macro_exports::auto_register
    }
}
