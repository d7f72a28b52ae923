// bool, char, integers, floats, str
mod native_basic;

// &T, &mut T
mod native_ref;

// [T], [T; N]
mod native_array;

// ()  (P0,)  (P0, P1)  ...  (P0, P1, .. P11)
mod native_tuple;
