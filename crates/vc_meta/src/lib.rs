#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names `vc_meta`, also inside this crate's own tests.
// `macro_utils::Manifest` picks a single path, so `vc_meta` must be an alias
// for `crate` here.
extern crate self as vc_meta;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod meta;

pub mod impls;
pub mod info;
pub mod kind;
pub mod ops;
pub mod registry;
pub mod table;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

#[cfg(doctest)]
mod rejected;

pub use meta::{FieldMutFn, FieldRefFn, Meta};
pub use vc_meta_derive as derive;

#[cfg(test)]
mod tests {
    use crate::derive::Meta;
    use crate::info::Shape;

    #[derive(Meta)]
    struct Inner {
        /// Docs reach the descriptor.
        a: u8,
        b: u8,
    }

    #[test]
    fn derive_inside_the_crate() {
        use crate::Meta as _;

        let info = Inner::type_info();
        assert_eq!(info.shape(), Shape::Named);
        assert_eq!(info.fields()[0].docs(), Some("Docs reach the descriptor."));

        let mut value = Inner { a: 1, b: 2 };
        let table = Inner::ordinal_table();
        let InnerFieldMut::U8(b) = table.get_mut(&mut value, 1).unwrap();
        *b = 9;
        assert_eq!((value.a, value.b), (1, 9));
    }
}
