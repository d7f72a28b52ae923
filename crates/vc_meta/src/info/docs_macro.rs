/// `docs` and `with_docs` for info types with a `docs: Option<&'static str>` field.
macro_rules! impl_docs_fn {
    ($field:ident) => {
        /// Returns the documentation attached in the declaration, if any.
        #[inline(always)]
        pub const fn docs(&self) -> Option<&'static str> {
            self.$field
        }

        /// Returns `true` if documentation is attached.
        #[inline(always)]
        pub const fn has_docs(&self) -> bool {
            self.$field.is_some()
        }

        /// Replaces docs (overwrite, do not merge).
        ///
        /// Used by the proc-macro crate.
        #[inline]
        pub fn with_docs(self, $field: Option<&'static str>) -> Self {
            Self { $field, ..self }
        }
    };
}

/// The accessors shared by [`NamedInfo`] and [`PositionalInfo`].
///
/// [`NamedInfo`]: crate::info::NamedInfo
/// [`PositionalInfo`]: crate::info::PositionalInfo
macro_rules! impl_fields_fn {
    () => {
        /// Returns the [`Type`](crate::info::Type) of the described type.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.ty
        }

        /// Returns the type identifier, without module path or generics.
        #[inline(always)]
        pub const fn ident(&self) -> &'static str {
            self.ident
        }

        /// Returns the field descriptors in declaration order.
        #[inline]
        pub fn fields(&self) -> &[$crate::info::FieldDescriptor] {
            &self.fields
        }

        /// Returns the descriptor of the field at ordinal `index`.
        #[inline]
        pub fn field_at(&self, index: usize) -> Option<&$crate::info::FieldDescriptor> {
            self.fields.get(index)
        }

        /// Returns the number of fields.
        #[inline]
        pub fn field_len(&self) -> usize {
            self.fields.len()
        }

        /// Returns the variant cases, in first-occurrence order.
        #[inline]
        pub fn cases(&self) -> &[$crate::info::VariantCase] {
            &self.cases
        }

        /// Returns the variant case the field at `index` maps to.
        #[inline]
        pub fn case_of(&self, index: usize) -> Option<&$crate::info::VariantCase> {
            self.cases.get(self.fields.get(index)?.case())
        }
    };
}

pub(super) use impl_docs_fn;
pub(super) use impl_fields_fn;
