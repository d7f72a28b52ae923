mod atomic;
mod marker;
mod num;
mod option;
