//! Interned identifier.

use std::fmt;

/// Interned identifier.
///
/// A plain index into the [`StringInterner`](crate::StringInterner) that
/// produced it. Two names from the same interner are equal exactly when the
/// identifiers they stand for are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty identifier.
    pub const EMPTY: Name = Name(0);

    /// Create from raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
