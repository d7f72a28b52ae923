use core::fmt;

/// A typed handle to one field of `T` with value type `F`.
///
/// Holds the ordinal, the declared name and a pair of function pointers
/// projecting `&T` to `&F` (and `&mut T` to `&mut F`). Copying it is free.
///
/// Generated `{T}Accessor` enums wrap one `Accessor<T, F>` per case.
///
/// # Examples
///
/// ```
/// use vc_meta::table::Accessor;
///
/// struct Pixel { x: u16, y: u16 }
///
/// const Y: Accessor<Pixel, u16> =
///     Accessor::new(1, Some("y"), |p| &p.y, |p| &mut p.y);
///
/// let mut pixel = Pixel { x: 3, y: 4 };
/// *Y.get_mut(&mut pixel) += 1;
///
/// assert_eq!(*Y.get(&pixel), 5);
/// assert_eq!(Y.name(), Some("y"));
/// assert_eq!(Y.index(), 1);
/// # let _ = pixel.x;
/// ```
pub struct Accessor<T: ?Sized, F: ?Sized> {
    index: usize,
    name: Option<&'static str>,
    get: fn(&T) -> &F,
    get_mut: fn(&mut T) -> &mut F,
}

impl<T: ?Sized, F: ?Sized> Accessor<T, F> {
    /// Creates an accessor. Used by the proc-macro crate.
    #[inline(always)]
    pub const fn new(
        index: usize,
        name: Option<&'static str>,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        Self {
            index,
            name,
            get,
            get_mut,
        }
    }

    /// Ordinal of the field.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declared name of the field, `None` for positional types.
    #[inline(always)]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Borrows the field out of `value`.
    #[inline(always)]
    pub fn get<'a>(&self, value: &'a T) -> &'a F {
        (self.get)(value)
    }

    /// Mutably borrows the field out of `value`.
    #[inline(always)]
    pub fn get_mut<'a>(&self, value: &'a mut T) -> &'a mut F {
        (self.get_mut)(value)
    }
}

impl<T: ?Sized, F: ?Sized> Clone for Accessor<T, F> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, F: ?Sized> Copy for Accessor<T, F> {}

impl<T: ?Sized, F: ?Sized> fmt::Debug for Accessor<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("field_type", &core::any::type_name::<F>())
            .finish()
    }
}
