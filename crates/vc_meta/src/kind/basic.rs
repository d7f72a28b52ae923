use alloc::string::String;

use super::TypeKind;

macro_rules! define_basic {
    ($($variant:ident($ty:ty) => $kind:ident,)*) => {
        /// A scalar value of any scalar kind.
        ///
        /// Codecs decode into it when the target type is only known at run
        /// time, such as a value found through a registry.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Basic {
            $( $variant($ty), )*
        }

        /// A mutable reference to a scalar of any scalar kind.
        #[derive(Debug, PartialEq)]
        pub enum BasicMut<'a> {
            $( $variant(&'a mut $ty), )*
        }

        impl Basic {
            /// The kind of the held value.
            pub const fn kind(&self) -> TypeKind {
                match self {
                    $( Basic::$variant(_) => TypeKind::$kind, )*
                }
            }

            /// Borrows the held value mutably.
            pub fn as_mut(&mut self) -> BasicMut<'_> {
                match self {
                    $( Basic::$variant(value) => BasicMut::$variant(value), )*
                }
            }
        }

        impl BasicMut<'_> {
            /// The kind of the referenced value.
            pub const fn kind(&self) -> TypeKind {
                match self {
                    $( BasicMut::$variant(_) => TypeKind::$kind, )*
                }
            }

            /// Overwrites the referenced value with `value` if both hold the
            /// same scalar type. Returns `value` back otherwise.
            pub fn assign(&mut self, value: Basic) -> Result<(), Basic> {
                match (self, value) {
                    $( (BasicMut::$variant(target), Basic::$variant(value)) => {
                        **target = value;
                        Ok(())
                    } )*
                    (_, value) => Err(value),
                }
            }
        }

        $(
            impl From<$ty> for Basic {
                #[inline]
                fn from(value: $ty) -> Self {
                    Basic::$variant(value)
                }
            }

            impl<'a> From<&'a mut $ty> for BasicMut<'a> {
                #[inline]
                fn from(value: &'a mut $ty) -> Self {
                    BasicMut::$variant(value)
                }
            }
        )*
    };
}

define_basic! {
    Bool(bool) => Bool,
    Char(char) => Char,
    I8(i8) => Integer,
    I16(i16) => Integer,
    I32(i32) => Integer,
    I64(i64) => Integer,
    I128(i128) => Integer,
    Isize(isize) => Integer,
    U8(u8) => Integer,
    U16(u16) => Integer,
    U32(u32) => Integer,
    U64(u64) => Integer,
    U128(u128) => Integer,
    Usize(usize) => Integer,
    F32(f32) => Float,
    F64(f64) => Float,
    String(String) => String,
}

impl From<&str> for Basic {
    #[inline]
    fn from(value: &str) -> Self {
        Basic::String(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{Basic, BasicMut};
    use crate::kind::TypeKind;

    #[test]
    fn conversions_and_kinds() {
        assert_eq!(Basic::from(3_u16), Basic::U16(3));
        assert_eq!(Basic::from("x").kind(), TypeKind::String);
        assert_eq!(Basic::from('c').kind(), TypeKind::Char);
        assert_eq!(Basic::from(1.5_f32).kind(), TypeKind::Float);
    }

    #[test]
    fn assign_through_reference() {
        let mut value = 1_i64;
        let mut target = BasicMut::from(&mut value);
        assert_eq!(target.kind(), TypeKind::Integer);

        assert!(target.assign(Basic::I64(9)).is_ok());
        assert_eq!(target.assign(Basic::I32(9)), Err(Basic::I32(9)));
        assert_eq!(value, 9);
    }

    #[test]
    fn as_mut_round() {
        let mut basic = Basic::from(false);
        if let BasicMut::Bool(flag) = basic.as_mut() {
            *flag = true;
        }
        assert_eq!(basic, Basic::Bool(true));
    }
}
