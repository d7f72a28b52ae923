//! Operations on types that have no declaration.

// -----------------------------------------------------------------------------
// Modules

mod tuple;

// -----------------------------------------------------------------------------
// Exports

pub use tuple::{SlotFn, TupleAccess};
pub use tuple::{TupleSlot1, TupleSlot2, TupleSlot3, TupleSlot4, TupleSlot5, TupleSlot6};
pub use tuple::{TupleSlot7, TupleSlot8, TupleSlot9, TupleSlot10, TupleSlot11, TupleSlot12};
