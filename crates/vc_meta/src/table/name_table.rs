use core::fmt;

use crate::Meta;
use crate::info::{FieldDescriptor, NamedInfo};
use crate::table::LookupError;

/// Field name to [`Meta::Accessor`] dispatch for named types.
///
/// Combines the name index of the once-built [`NamedInfo`] with the
/// constant [`Meta::ACCESSORS`] array. Lookups hash the name once and never
/// allocate on success.
///
/// # Examples
///
/// ```
/// use vc_meta::{Meta, derive::Meta};
///
/// #[derive(Meta)]
/// struct Config {
///     retries: u8,
///     verbose: bool,
/// }
///
/// let table = Config::name_table().unwrap();
/// let mut config = Config { retries: 1, verbose: false };
///
/// match table.get("verbose").unwrap().get_mut(&mut config) {
///     ConfigFieldMut::Bool(flag) => *flag = true,
///     ConfigFieldMut::U8(_) => unreachable!(),
/// }
///
/// assert!(config.verbose);
/// assert_eq!(table.index_of("retries"), Some(0));
/// assert!(table.get("timeout").is_err());
/// ```
pub struct NameTable<T: Meta> {
    info: &'static NamedInfo,
    accessors: &'static [T::Accessor],
}

impl<T: Meta> NameTable<T> {
    /// The table of `T`, `None` if `T` is positional.
    #[inline]
    pub fn new() -> Option<Self> {
        let info = T::type_info().as_named().ok()?;
        Some(Self {
            info,
            accessors: T::ACCESSORS,
        })
    }

    /// Returns the accessor of the field called `name`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownField`] if `T` declares no such field.
    #[inline]
    pub fn get(&self, name: &str) -> Result<T::Accessor, LookupError> {
        let index = self.require(name)?;
        Ok(self.accessors[index])
    }

    #[inline]
    fn require(&self, name: &str) -> Result<usize, LookupError> {
        match self.index_of(name) {
            Some(index) => Ok(index),
            None => Err(self.unknown(name)),
        }
    }

    #[cold]
    fn unknown(&self, name: &str) -> LookupError {
        LookupError::UnknownField {
            type_path: self.info.ty().path(),
            name: name.into(),
        }
    }

    /// A shared reference to the field called `name` of `value`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownField`] if `T` declares no such field.
    #[inline]
    pub fn field<'a>(&self, value: &'a T, name: &str) -> Result<T::FieldRef<'a>, LookupError> {
        let index = self.require(name)?;
        Ok(T::FIELDS_REF[index](value))
    }

    /// A mutable reference to the field called `name` of `value`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownField`] if `T` declares no such field.
    #[inline]
    pub fn field_mut<'a>(
        &self,
        value: &'a mut T,
        name: &str,
    ) -> Result<T::FieldMut<'a>, LookupError> {
        let index = self.require(name)?;
        Ok(T::FIELDS_MUT[index](value))
    }

    /// Returns the ordinal of the field called `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.info.index_of(name)
    }

    /// Returns `true` if `T` declares a field called `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the descriptor of the field called `name`.
    #[inline]
    pub fn descriptor(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.info.field(name)
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    /// Field names in declaration order.
    #[inline]
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> + use<T> {
        self.info.names()
    }

    /// `(name, accessor)` pairs in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, T::Accessor)> + use<T> {
        self.info.names().zip(self.accessors.iter().copied())
    }
}

impl<T: Meta> Clone for NameTable<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Meta> Copy for NameTable<T> {}

impl<T: Meta> fmt::Debug for NameTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
