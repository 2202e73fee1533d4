//! Struct `Depth` bounds the recursion of the tree induction.
use std::{fmt, cmp, ops};

/// The remaining depth of a tree.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Depth(usize);

impl Depth {
    /// Returns `true` if no more splits are allowed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.0;
        write!(f, "{depth}")
    }
}

impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}

impl ops::Sub<usize> for Depth {
    type Output = Self;
    /// The subtraction saturates at `0`.
    #[inline]
    fn sub(self, other: usize) -> Self::Output {
        Self(self.0.saturating_sub(other))
    }
}

impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0.eq(rhs)
    }
}

impl cmp::PartialOrd<usize> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &usize) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_saturates() {
        let depth = Depth::from(1);
        assert_eq!(depth - 1, 0);
        assert!((depth - 1).is_exhausted());
        assert!((depth - 1 - 1).is_exhausted());
        assert!(Depth::from(3) > 2);
    }
}
