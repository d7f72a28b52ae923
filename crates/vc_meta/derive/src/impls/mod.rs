// -----------------------------------------------------------------------------
// Modules

mod match_meta;

mod auto_register;
mod enums;
mod trait_classify;
mod trait_meta;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_meta::match_meta_impls;

use auto_register::get_auto_register_impl;
use enums::{define_variant_enums, impl_variant_enums};
use trait_classify::impl_trait_classify;
use trait_meta::impl_trait_meta;
