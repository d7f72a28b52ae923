//! See following macros:
//!
//! - [`Meta`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static META_ATTRIBUTE_NAME: &str = "meta";

// -----------------------------------------------------------------------------
// Modules

mod decl;
mod derive_data;
mod impls;
mod path;
mod utils;
mod variant;

// -----------------------------------------------------------------------------
// Macros

/// # Field Metadata Derivation
///
/// `#[derive(Meta)]` implements `Classify` and `Meta` for a struct and
/// emits three enums next to it:
///
/// - `{T}Accessor`: one case per distinct field type, each holding an
///   `Accessor<T, F>` (ordinal, name, getters);
/// - `{T}FieldRef<'a>`: the same cases holding `&'a F`;
/// - `{T}FieldMut<'a>`: the same cases holding `&'a mut F`.
///
/// Cases are named after the field type (`i32` -> `I32`, `Vec<u8>` -> `VecU8`)
/// in order of first appearance. A struct without fields gets no enums.
///
/// ## Declarations
///
/// Without attributes the declaration follows the struct:
///
/// - named fields become named entries, `///` comments become their docs;
/// - tuple fields become positional entries;
/// - a unit struct has an empty, positional declaration.
///
/// ```rust, ignore
/// #[derive(Meta)]
/// struct Point {
///     /// Horizontal position.
///     x: i32,
///     y: i32,
/// }
/// ```
///
/// The declaration can be written out instead. `object(..)` is a list of
/// groups `"name", accessor[, doc("...")]`, a string always opens the next
/// group:
///
/// ```rust, ignore
/// #[derive(Meta)]
/// #[meta(object("x", x, doc("Horizontal position."), "y", y))]
/// struct Point { x: i32, y: i32, cache: u64 }
/// ```
///
/// `array(..)` only takes accessors, the fields are then reached by
/// ordinal only:
///
/// ```rust, ignore
/// #[derive(Meta)]
/// #[meta(array(r, g, b))]
/// struct Rgb { r: u8, g: u8, b: u8 }
/// ```
///
/// These are compile errors:
///
/// - a group with fewer than two or more than three elements;
/// - a group that does not read name, accessor, doc in that order;
/// - the same name declared twice;
/// - an accessor that is not a field of the struct;
/// - a name or doc inside `array(..)`.
///
/// ## Type attributes
///
/// - `#[meta(positional)]`: synthesize a positional declaration from a struct
///   with named fields.
/// - `#[meta(doc = "...")]`, `#[meta(doc = false)]`: replace or drop the
///   collected docs.
/// - `#[meta(auto_register)]`: add the type to the static registry. No effect
///   on generic types, or without the `auto_register` feature.
///
/// ## Field attributes
///
/// Only read when the declaration is synthesized.
///
/// - `#[meta(rename = "...")]`: the declared name.
/// - `#[meta(skip)]`: leave the field out.
/// - `#[meta(doc = "...")]`, `#[meta(doc = false)]`: as above.
///
/// ## Generics
///
/// Type and const parameters are supported as long as each one appears in a
/// declared field type. Lifetime parameters are rejected, `Meta` types are
/// `'static`.
#[proc_macro_derive(Meta, attributes(meta))]
pub fn derive_meta(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_meta_impls(ast)
}

/// Add a type to the static registry.
///
/// If the feature is not enabled, this macro will not do anything.
///
/// The type must be concrete (no uncertain generic parameters).
///
/// ## Example
///
/// ```ignore
/// impl_auto_register!(Wrapper<u32>); // Ok
/// impl_auto_register!(Wrapper<T>); // Error
/// ```
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return utils::empty().into();

    #[cfg(feature = "auto_register")]
    {
        use quote::quote;

        let type_path = parse_macro_input!(_input as syn::Type);

        let vc_meta_path = path::vc_meta();
        let auto_register_ = path::auto_register_(&vc_meta_path);

        TokenStream::from(quote! {
            const _: () = {
                #auto_register_::inventory::submit!{
                    #auto_register_::__AutoRegisterFunc(
                        <#type_path as #auto_register_::__RegisterType>::__register
                    )
                }
            };
        })
    }
}
