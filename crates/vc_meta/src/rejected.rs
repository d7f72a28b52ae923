//! Declarations the derive refuses.
//!
//! A group with a single element:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! #[meta(object("x"))]
//! struct Lonely { x: u8 }
//! ```
//!
//! A group with four elements:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! #[meta(object("x", x, doc("a"), doc("b")))]
//! struct Crowded { x: u8 }
//! ```
//!
//! The same name twice:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! #[meta(object("x", x, "x", y))]
//! struct Twice { x: u8, y: u8 }
//! ```
//!
//! A name inside `array(..)`:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! #[meta(array("x", x))]
//! struct Named { x: u8 }
//! ```
//!
//! An accessor that is not a field:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! #[meta(object("x", z))]
//! struct Missing { x: u8 }
//! ```
//!
//! A lifetime parameter:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! struct Borrowed<'a> { text: &'a str }
//! ```
//!
//! A type parameter no field mentions:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! #[meta(object("id", id))]
//! struct Unused<T> { id: u32, marker: Option<T> }
//! ```
//!
//! A field type outside the classified set:
//!
//! ```compile_fail
//! use vc_meta::derive::Meta;
//!
//! struct Opaque;
//!
//! #[derive(Meta)]
//! struct Holder { inner: Opaque }
//! ```
//!
//! The same declaration with supported types compiles:
//!
//! ```
//! use vc_meta::derive::Meta;
//!
//! #[derive(Meta)]
//! #[meta(object("x", x, "y", y))]
//! struct Plain { x: u8, y: u8 }
//! ```
