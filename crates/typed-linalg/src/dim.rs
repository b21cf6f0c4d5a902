use std::fmt;

/// A dimension tag standing for the positive size `N`.
///
/// `Dim<N>` is a zero-sized type; each size is its own type, so two tags refer to the same
/// dimension exactly when they are the same type. Every [`Matrix`][crate::Matrix] carries one tag
/// for its rows and one for its columns, and that is what lets the compiler reject
/// shape-incompatible operations.
///
/// The aliases `S1` through `S16` exist both as types and as constants, so they can be passed to
/// factory functions directly:
///
/// ```
/// # use typed_linalg::*;
/// let tag: S3 = S3;
/// assert_eq!(tag.size(), 3);
/// assert_eq!(Dim::<40>::SIZE, 40);
/// ```
///
/// Zero is not a valid dimension. Building a matrix with a zero-sized tag fails to compile:
///
/// ```compile_fail
/// # use typed_linalg::*;
/// let m = dense(Dim::<0>, S2, |_, _| 1.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim<const N: usize>;

impl<const N: usize> Dim<N> {
    /// The size this tag stands for.
    pub const SIZE: usize = N;

    /// Evaluated by every constructor, which turns a zero-sized tag into a build error.
    pub(crate) const ASSERT_POSITIVE: () = assert!(N > 0, "matrix dimensions must be positive");

    /// Returns the size this tag stands for.
    #[inline]
    pub const fn size(self) -> usize {
        N
    }
}

impl<const N: usize> fmt::Debug for Dim<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim<{N}>")
    }
}

impl<const N: usize> fmt::Display for Dim<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        N.fmt(f)
    }
}

macro_rules! dim_aliases {
    ($($name:ident = $n:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Dimension tag for size ", stringify!($n), ".")]
            pub type $name = Dim<$n>;
            #[doc = concat!("Dimension tag for size ", stringify!($n), ".")]
            pub const $name: Dim<$n> = Dim;
        )+
    };
}

dim_aliases!(
    S1 = 1,
    S2 = 2,
    S3 = 3,
    S4 = 4,
    S5 = 5,
    S6 = 6,
    S7 = 7,
    S8 = 8,
    S9 = 9,
    S10 = 10,
    S11 = 11,
    S12 = 12,
    S13 = 13,
    S14 = 14,
    S15 = 15,
    S16 = 16,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(S1.size(), 1);
        assert_eq!(S16.size(), 16);
        assert_eq!(Dim::<1000>::SIZE, 1000);
        assert_eq!(<S7>::SIZE, 7);
    }

    #[test]
    fn identity() {
        // Same size, same type.
        let a: S4 = Dim::<4>;
        assert_eq!(a, S4);
        assert_eq!(std::mem::size_of::<S4>(), 0);
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{:?}", S3), "Dim<3>");
        assert_eq!(S12.to_string(), "12");
    }
}
