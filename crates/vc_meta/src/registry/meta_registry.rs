use core::any::TypeId;
use core::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use alloc::boxed::Box;
use vc_utils::TypeIdMap;
use vc_utils::hash::{HashMap, HashSet};

use crate::Meta;
use crate::info::{TypeInfo, short_path};

/// A run-time index of `Meta` types.
///
/// Maps [`TypeId`], full type path and short type name to the type's
/// [`TypeInfo`]. Codecs that receive a type name on the wire use it to find
/// the tables of the type to decode.
///
/// Short names drop every module prefix (`Vec<demo::Point>` becomes
/// `Vec<Point>`). A short name registered by two types is ambiguous and can
/// only be resolved through the full path.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_meta::derive::Meta;
/// use vc_meta::registry::MetaRegistry;
///
/// #[derive(Meta)]
/// struct Point { x: i32, y: i32 }
///
/// let mut registry = MetaRegistry::new();
/// assert!(registry.register::<Point>());
/// assert!(!registry.register::<Point>());
///
/// let info = registry.get_with_type_name("Point").unwrap();
/// assert_eq!(info.ty().id(), TypeId::of::<Point>());
/// assert!(registry.get(TypeId::of::<Point>()).is_some());
/// ```
pub struct MetaRegistry {
    infos: TypeIdMap<&'static TypeInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<Box<str>, TypeId>,
    ambiguous_names: HashSet<Box<str>>,
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    auto_registered: bool,
}

impl Default for MetaRegistry {
    /// See [`MetaRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl MetaRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            infos: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(vc_utils::hash::FixedHashState),
            type_name_to_id: HashMap::with_hasher(vc_utils::hash::FixedHashState),
            ambiguous_names: HashSet::with_hasher(vc_utils::hash::FixedHashState),
            auto_registered: false,
        }
    }

    // The type must not be registered yet.
    fn add_new_type_indices(&mut self, info: &'static TypeInfo) {
        let ty = info.ty();
        let type_name = short_path(ty.path()).into_boxed_str();

        if !self.ambiguous_names.contains(&*type_name) {
            if self.type_name_to_id.remove(&*type_name).is_some() {
                log::warn!(
                    "type name `{type_name}` is ambiguous, look `{}` up by its full path",
                    ty.path()
                );
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        self.type_path_to_id.insert(ty.path(), ty.id());
    }

    /// Registers `T`. Returns `false` if it was already registered.
    pub fn register<T: Meta>(&mut self) -> bool {
        debug_assert_eq!(
            T::ACCESSORS.len(),
            T::FIELD_COUNT,
            "accessor table of `{}` does not match its field count",
            core::any::type_name::<T>()
        );
        self.register_info(T::type_info())
    }

    /// Registers a type through its info. Returns `false` if it was already
    /// registered.
    pub fn register_info(&mut self, info: &'static TypeInfo) -> bool {
        let type_id = info.ty().id();
        if self.infos.contains(&type_id) {
            return false;
        }
        self.infos.insert(type_id, info);
        self.add_new_type_indices(info);
        log::debug!("registered `{}` ({})", info.type_path(), info.shape());
        true
    }

    /// Registers every non-generic type annotated with `#[meta(auto_register)]`.
    ///
    /// Repeated calls are cheap and insert nothing twice.
    ///
    /// Returns `true` if static registration works on this platform. Without
    /// the `auto_register` feature this does nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use vc_meta::derive::Meta;
    /// use vc_meta::registry::MetaRegistry;
    ///
    /// #[derive(Meta)]
    /// #[meta(auto_register)]
    /// struct Token { kind: u8, text: String }
    ///
    /// let mut registry = MetaRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Token>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if self.auto_registered {
                return true;
            }
            let before = self.len();
            crate::__macro_exports::auto_register::__register_types(self);
            log::debug!(
                "auto registration added {} types, available: {}",
                self.len() - before,
                self.auto_registered
            );
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Marks static registration as working, see [`auto_register`](Self::auto_register).
    #[cfg(feature = "auto_register")]
    #[inline]
    pub(crate) fn mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }

    /// Returns `true` if the type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.infos.contains(&type_id)
    }

    /// Returns the info of a registered type.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.infos.get(&type_id).copied()
    }

    /// Returns the info of the type with the given full path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeInfo> {
        self.get(*self.type_path_to_id.get(type_path)?)
    }

    /// Returns the info of the type with the given short name.
    ///
    /// `None` if no registered type has that name, or if the name is
    /// ambiguous (see [`is_ambiguous`](Self::is_ambiguous)).
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static TypeInfo> {
        self.get(*self.type_name_to_id.get(type_name)?)
    }

    /// Returns `true` if the short name matches several registered types.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Iterates over the infos of all registered types, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.infos.values().copied()
    }

    /// Number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

impl fmt::Debug for MetaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// MetaRegistryArc

/// A [`MetaRegistry`] shared between threads.
#[derive(Clone, Default)]
pub struct MetaRegistryArc {
    /// The wrapped [`MetaRegistry`].
    pub internal: Arc<RwLock<MetaRegistry>>,
}

impl MetaRegistryArc {
    /// Takes a read lock on the underlying [`MetaRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, MetaRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`MetaRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, MetaRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for MetaRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::MetaRegistry;
    use crate::info::{PositionalInfo, TypeInfo};
    use crate::kind::{Classify, TypeKind};
    use alloc::boxed::Box;
    use core::any::TypeId;

    mod first {
        pub struct Same;
    }

    mod second {
        pub struct Same;
    }

    impl Classify for first::Same {
        const KIND: TypeKind = TypeKind::Positional;
    }

    impl Classify for second::Same {
        const KIND: TypeKind = TypeKind::Positional;
    }

    fn leak<T: Classify + 'static>() -> &'static TypeInfo {
        Box::leak(Box::new(TypeInfo::Positional(PositionalInfo::new::<T>(
            "Same",
            &[],
            &[],
        ))))
    }

    #[test]
    fn ambiguous_short_names() {
        let mut registry = MetaRegistry::new();
        assert!(registry.register_info(leak::<first::Same>()));
        assert!(registry.get_with_type_name("Same").is_some());

        assert!(registry.register_info(leak::<second::Same>()));
        assert!(registry.is_ambiguous("Same"));
        assert!(registry.get_with_type_name("Same").is_none());

        let path = core::any::type_name::<second::Same>();
        let info = registry.get_with_type_path(path).unwrap();
        assert_eq!(info.ty().id(), TypeId::of::<second::Same>());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut registry = MetaRegistry::default();
        let info = leak::<first::Same>();
        assert!(registry.register_info(info));
        assert!(!registry.register_info(info));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_ambiguous("Same"));
    }
}
