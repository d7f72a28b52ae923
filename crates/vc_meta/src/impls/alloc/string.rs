use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use crate::impls::impl_classify;
use crate::kind::{Classify, TypeKind};

impl_classify!(String: String, Box<str>, Rc<str>, Arc<str>);

impl Classify for Cow<'_, str> {
    const KIND: TypeKind = TypeKind::String;
}

#[cfg(test)]
mod tests {
    use crate::kind::{TypeKind, is_string};
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    #[test]
    fn text_types() {
        assert!(is_string::<String>());
        assert!(is_string::<Box<str>>());
        assert!(is_string::<Arc<str>>());
        assert!(is_string::<Cow<'static, str>>());
        assert_eq!(crate::kind::kind_of::<str>(), TypeKind::String);
    }
}
