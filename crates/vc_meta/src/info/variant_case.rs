use crate::info::Type;
use crate::kind::Classify;

/// One case of a type's variant enums.
///
/// The derive emits `{T}Accessor`, `{T}FieldRef<'a>` and `{T}FieldMut<'a>`
/// with one case per distinct field type. A `VariantCase` names the case,
/// records the wrapped type and lists the ordinals of the fields of that type.
///
/// # Examples
///
/// ```
/// use vc_meta::info::VariantCase;
///
/// let case = VariantCase::new::<i32>("I32", &[0, 2]);
///
/// assert_eq!(case.ident(), "I32");
/// assert!(case.ty().is::<i32>());
/// assert!(case.contains(2));
/// assert!(!case.contains(1));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct VariantCase {
    ident: &'static str,
    ty: Type,
    ordinals: &'static [usize],
}

impl VariantCase {
    /// Creates a case wrapping `F`, shared by the fields at `ordinals`.
    #[inline]
    pub fn new<F: Classify + ?Sized + 'static>(
        ident: &'static str,
        ordinals: &'static [usize],
    ) -> Self {
        Self {
            ident,
            ty: Type::of::<F>(),
            ordinals,
        }
    }

    /// The case identifier, e.g. `VecU8` for `Vec<u8>`.
    #[inline(always)]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// The wrapped field type.
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Ordinals of the fields of this type, ascending.
    #[inline(always)]
    pub const fn ordinals(&self) -> &'static [usize] {
        self.ordinals
    }

    /// Returns `true` if the field at `index` maps to this case.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.ordinals.binary_search(&index).is_ok()
    }
}
