use core::sync::atomic::AtomicBool;
use core::sync::atomic::{AtomicI8, AtomicI16, AtomicI32, AtomicIsize};
use core::sync::atomic::{AtomicU8, AtomicU16, AtomicU32, AtomicUsize};

use crate::impls::impl_classify;

impl_classify!(Bool: AtomicBool);
impl_classify!(Integer: AtomicI8, AtomicI16, AtomicI32, AtomicIsize);
impl_classify!(Integer: AtomicU8, AtomicU16, AtomicU32, AtomicUsize);

#[cfg(target_has_atomic = "64")]
impl_classify!(Integer: core::sync::atomic::AtomicI64, core::sync::atomic::AtomicU64);

#[cfg(test)]
mod tests {
    use crate::kind::{TypeKind, kind_of};
    use core::sync::atomic::{AtomicBool, AtomicUsize};

    #[test]
    fn atomics_classify_like_values() {
        assert_eq!(kind_of::<AtomicBool>(), TypeKind::Bool);
        assert_eq!(kind_of::<AtomicUsize>(), TypeKind::Integer);
    }
}
