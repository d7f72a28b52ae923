mod collections;
mod string;
mod vec;
