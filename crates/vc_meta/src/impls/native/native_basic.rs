use crate::impls::impl_classify;

impl_classify!(Bool: bool);
impl_classify!(Char: char);
impl_classify!(Integer: i8, i16, i32, i64, i128, isize);
impl_classify!(Integer: u8, u16, u32, u64, u128, usize);
impl_classify!(Float: f32, f64);
impl_classify!(String: str);
impl_classify!(None: ());
