//! One-byte boolean element type
//!
//! `bool` is not `Pod` (only 0 and 1 are valid bit patterns), so boolean views
//! store `Bool`, a transparent byte that kernels only ever write as 0 or 1.

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Boolean element stored as a single byte
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Bool(pub u8);

impl Bool {
    /// False
    pub const FALSE: Self = Self(0);
    /// True
    pub const TRUE: Self = Self(1);

    /// Create from a Rust bool
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self(value as u8)
    }

    /// Any non-zero byte reads as true
    #[inline]
    pub const fn get(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<Bool> for bool {
    #[inline]
    fn from(value: Bool) -> Self {
        value.get()
    }
}

impl fmt::Debug for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
