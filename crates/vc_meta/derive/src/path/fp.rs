//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the caller has in scope.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! full_path {
    ($name:ident => $($path:tt)*) => {
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($($path)*));
            }
        }
    };
}

full_path!(OptionFP => ::core::option::Option);
full_path!(CloneFP => ::core::clone::Clone);
full_path!(CopyFP => ::core::marker::Copy);
full_path!(DebugFP => ::core::fmt::Debug);
full_path!(FmtFP => ::core::fmt);
full_path!(InfallibleFP => ::core::convert::Infallible);
