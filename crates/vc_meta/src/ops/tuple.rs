//! Run-time slot access for tuples.
//!
//! Tuples have no declaration, so the derive never sees them. [`TupleAccess`]
//! gives every tuple of up to twelve elements the same ordinal dispatch a
//! positional `Meta` type has, through `TupleSlotN` pointer unions with one
//! case per element.

use crate::table::LookupError;

/// An entry of [`TupleAccess::SLOTS`].
pub type SlotFn<T> = for<'a> fn(&'a mut T) -> <T as TupleAccess>::Slot<'a>;

/// Ordinal access to the elements of a tuple.
///
/// # Examples
///
/// ```
/// use vc_meta::ops::{TupleAccess, TupleSlot3};
///
/// let mut tuple = (1_u8, String::from("a"), 2.0_f32);
///
/// let arity = <(u8, String, f32)>::ARITY;
/// for index in 0..arity {
///     match tuple.slot_mut(index).unwrap() {
///         TupleSlot3::P0(value) => *value += 1,
///         TupleSlot3::P1(value) => value.push('b'),
///         TupleSlot3::P2(value) => *value *= 2.0,
///     }
/// }
///
/// assert_eq!(tuple, (2, String::from("ab"), 4.0));
/// assert!(tuple.slot_mut(3).is_err());
/// ```
pub trait TupleAccess: Sized + 'static {
    /// Number of elements.
    const ARITY: usize;

    /// The `TupleSlotN` union of this arity.
    type Slot<'a>
    where
        Self: 'a;

    /// One projection per element, indexed by ordinal.
    const SLOTS: &'static [SlotFn<Self>];

    /// The slot table, [`SLOTS`](TupleAccess::SLOTS).
    #[inline(always)]
    fn slot_table() -> &'static [SlotFn<Self>] {
        Self::SLOTS
    }

    /// A mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`LookupError::IndexOutOfRange`] if `index >= Self::ARITY`.
    #[inline]
    fn slot_mut(&mut self, index: usize) -> Result<Self::Slot<'_>, LookupError> {
        match Self::SLOTS.get(index) {
            Some(slot) => Ok(slot(self)),
            None => Err(LookupError::IndexOutOfRange {
                type_path: core::any::type_name::<Self>(),
                index,
                len: Self::ARITY,
            }),
        }
    }
}

macro_rules! impl_tuple_access {
    ($slot:ident, $arity:literal: $($index:tt => $name:ident),+) => {
        #[doc = concat!("A mutable reference to one element of a ", stringify!($arity), "-tuple.")]
        #[derive(Debug)]
        pub enum $slot<'a, $($name),+> {
            $( $name(&'a mut $name), )+
        }

        impl<$($name: 'static),+> TupleAccess for ($($name,)+) {
            const ARITY: usize = $arity;

            type Slot<'a> = $slot<'a, $($name),+>;

            const SLOTS: &'static [SlotFn<Self>] = &[
                $( |tuple| $slot::$name(&mut tuple.$index), )+
            ];
        }
    };
}

impl_tuple_access!(TupleSlot1, 1: 0 => P0);
impl_tuple_access!(TupleSlot2, 2: 0 => P0, 1 => P1);
impl_tuple_access!(TupleSlot3, 3: 0 => P0, 1 => P1, 2 => P2);
impl_tuple_access!(TupleSlot4, 4: 0 => P0, 1 => P1, 2 => P2, 3 => P3);
impl_tuple_access!(TupleSlot5, 5: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4);
impl_tuple_access!(TupleSlot6, 6: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5);
impl_tuple_access!(TupleSlot7, 7: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6);
impl_tuple_access!(TupleSlot8, 8: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6, 7 => P7);
impl_tuple_access!(TupleSlot9, 9: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6, 7 => P7, 8 => P8);
impl_tuple_access!(TupleSlot10, 10: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6, 7 => P7, 8 => P8, 9 => P9);
impl_tuple_access!(TupleSlot11, 11: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6, 7 => P7, 8 => P8, 9 => P9, 10 => P10);
impl_tuple_access!(TupleSlot12, 12: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6, 7 => P7, 8 => P8, 9 => P9, 10 => P10, 11 => P11);
