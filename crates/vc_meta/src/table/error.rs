use alloc::boxed::Box;

/// Failure of a run-time lookup in a [`NameTable`] or an [`OrdinalTable`].
///
/// [`NameTable`]: crate::table::NameTable
/// [`OrdinalTable`]: crate::table::OrdinalTable
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// The type declares no field with this name.
    #[error("`{type_path}` has no field named `{name}`")]
    UnknownField {
        type_path: &'static str,
        name: Box<str>,
    },
    /// The ordinal is not below the declared field count.
    #[error("field index {index} is out of range for `{type_path}` with {len} fields")]
    IndexOutOfRange {
        type_path: &'static str,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::LookupError;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        let err = LookupError::UnknownField {
            type_path: "demo::Point",
            name: "z".into(),
        };
        assert_eq!(err.to_string(), "`demo::Point` has no field named `z`");

        let err = LookupError::IndexOutOfRange {
            type_path: "demo::Point",
            index: 3,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "field index 3 is out of range for `demo::Point` with 2 fields"
        );
    }
}
