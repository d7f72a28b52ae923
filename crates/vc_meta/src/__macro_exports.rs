//! Items used by the code `vc_meta_derive` generates. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::Meta;
    use crate::registry::MetaRegistry;

    /// A registration function submitted by a derived type.
    pub struct __AutoRegisterFunc(pub fn(&mut MetaRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Names `MetaRegistry::register::<T>` as a plain function.
    pub trait __RegisterType {
        fn __register(registry: &mut MetaRegistry);
    }

    impl<T: Meta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut MetaRegistry) {
            registry.register::<T>();
        }
    }

    // Runs alongside the derived submissions. If the platform drops them,
    // this one is dropped too and the registry stays unmarked.
    inventory::submit! {
        __AutoRegisterFunc(MetaRegistry::mark_auto_registered)
    }

    pub(crate) fn __register_types(registry: &mut MetaRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
