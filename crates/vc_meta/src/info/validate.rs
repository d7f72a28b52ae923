//! Consistency checks of built type information, run in debug builds with
//! the `debug` feature.

use crate::info::TypeInfo;

/// Panics if `info` is internally inconsistent.
///
/// Derived infos always pass. Hand-written ones may not.
#[track_caller]
pub(crate) fn validate(info: &TypeInfo) {
    let path = info.type_path();
    let fields = info.fields();
    let cases = info.cases();

    for (ordinal, field) in fields.iter().enumerate() {
        assert_eq!(
            field.index(),
            ordinal,
            "`{path}`: field ordinals must be contiguous from zero"
        );
        let Some(case) = cases.get(field.case()) else {
            panic!("`{path}`: field {ordinal} maps to missing case {}", field.case());
        };
        assert!(
            case.ty() == field.ty() && case.contains(ordinal),
            "`{path}`: case `{}` does not cover field {ordinal}",
            case.ident()
        );
    }

    let covered: usize = cases.iter().map(|case| case.ordinals().len()).sum();
    assert_eq!(covered, fields.len(), "`{path}`: cases must cover every field once");

    match info {
        TypeInfo::Named(named) => {
            for field in fields {
                let Some(name) = field.name() else {
                    panic!("`{path}`: field {} of a named type has no name", field.index());
                };
                assert_eq!(
                    named.index_of(name),
                    Some(field.index()),
                    "`{path}`: duplicate field name `{name}`"
                );
            }
        }
        TypeInfo::Positional(_) => {
            assert!(
                fields.iter().all(|field| field.name().is_none()),
                "`{path}`: positional fields have no names"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::info::{FieldDescriptor, NamedInfo, PositionalInfo, TypeInfo, VariantCase};
    use crate::kind::{Classify, TypeKind};

    struct Probe;

    impl Classify for Probe {
        const KIND: TypeKind = TypeKind::Named;
    }

    #[test]
    fn consistent_info_passes() {
        validate(&TypeInfo::Positional(PositionalInfo::new::<Probe>(
            "Probe",
            &[
                FieldDescriptor::positional::<u8>(0),
                FieldDescriptor::positional::<u8>(1),
            ],
            &[VariantCase::new::<u8>("U8", &[0, 1])],
        )));
    }

    #[test]
    #[should_panic(expected = "duplicate field name `a`")]
    fn duplicate_names_panic() {
        validate(&TypeInfo::Named(NamedInfo::new::<Probe>(
            "Probe",
            &[
                FieldDescriptor::named::<u8>(0, "a"),
                FieldDescriptor::named::<u8>(1, "a"),
            ],
            &[VariantCase::new::<u8>("U8", &[0, 1])],
        )));
    }

    #[test]
    #[should_panic(expected = "maps to missing case")]
    fn missing_case_panics() {
        validate(&TypeInfo::Positional(PositionalInfo::new::<Probe>(
            "Probe",
            &[FieldDescriptor::positional::<u8>(0).with_case(3)],
            &[VariantCase::new::<u8>("U8", &[0])],
        )));
    }
}
