//! Data type system for distfill element views
//!
//! This module provides the `DType` enum naming every element type a view can
//! hold, the `Element` trait mapping Rust types onto it, and `DTypeSet` for the
//! per-kernel "supported types" tables.

mod boolean;
mod element;

pub use boolean::Bool;
pub use element::Element;

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Element types a view can hold
///
/// Kernels receive the dtype at runtime and map it onto a concrete Rust type
/// with `dispatch_dtype!`. Not every kernel supports every dtype; each kernel
/// checks its own `DTypeSet` first.
///
/// # Discriminant Values
///
/// - Floats: 0-9 (F64=0, F32=1, F16=2, BF16=3)
/// - Signed ints: 10-19 (I64=10, I32=11, I16=12, I8=13)
/// - Unsigned ints: 20-29 (U64=20, U32=21, U16=22, U8=23)
/// - Bool: 30
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    // Floating point types (0-9)
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point (most common)
    F32 = 1,
    /// 16-bit floating point (IEEE 754)
    F16 = 2,
    /// 16-bit brain floating point
    BF16 = 3,

    // Integer types
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 16-bit signed integer
    I16 = 12,
    /// 8-bit signed integer
    I8 = 13,

    // Unsigned integer types
    /// 64-bit unsigned integer
    U64 = 20,
    /// 32-bit unsigned integer
    U32 = 21,
    /// 16-bit unsigned integer
    U16 = 22,
    /// 8-bit unsigned integer
    U8 = 23,

    /// Boolean type, stored as one byte (0 or 1)
    Bool = 30,
}

impl DType {
    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32 | Self::F16 | Self::BF16)
    }

    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::U64 => "u64",
            Self::U32 => "u32",
            Self::U16 => "u16",
            Self::U8 => "u8",
            Self::Bool => "bool",
        }
    }

    /// Smallest integer value the dtype holds exactly (as i128)
    ///
    /// For floats this is `-(2^digits)`, the bound of the contiguous run of
    /// exactly representable integers.
    pub const fn int_lower_bound(self) -> i128 {
        match self {
            Self::F64 => -(1i128 << 53),
            Self::F32 => -(1i128 << 24),
            Self::F16 => -(1i128 << 11),
            Self::BF16 => -(1i128 << 8),
            Self::I64 => i64::MIN as i128,
            Self::I32 => i32::MIN as i128,
            Self::I16 => i16::MIN as i128,
            Self::I8 => i8::MIN as i128,
            Self::U64 | Self::U32 | Self::U16 | Self::U8 | Self::Bool => 0,
        }
    }

    /// Largest integer value the dtype holds exactly (as i128)
    pub const fn int_upper_bound(self) -> i128 {
        match self {
            Self::F64 => 1i128 << 53,
            Self::F32 => 1i128 << 24,
            Self::F16 => 1i128 << 11,
            Self::BF16 => 1i128 << 8,
            Self::I64 => i64::MAX as i128,
            Self::I32 => i32::MAX as i128,
            Self::I16 => i16::MAX as i128,
            Self::I8 => i8::MAX as i128,
            Self::U64 => u64::MAX as i128,
            Self::U32 => u32::MAX as i128,
            Self::U16 => u16::MAX as i128,
            Self::U8 => u8::MAX as i128,
            Self::Bool => 1,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Set of dtypes for efficient membership testing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DTypeSet {
    bits: u64,
}

impl DTypeSet {
    /// All floating point types
    pub const FLOATS: Self = Self::of(&[DType::F64, DType::F32, DType::F16, DType::BF16]);

    /// All signed integer types
    pub const SIGNED_INTS: Self = Self::of(&[DType::I64, DType::I32, DType::I16, DType::I8]);

    /// Create a set from a list of dtypes
    pub const fn of(dtypes: &[DType]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < dtypes.len() {
            bits |= 1 << dtypes[i] as u8;
            i += 1;
        }
        Self { bits }
    }

    /// Create a set containing a single dtype
    #[inline]
    pub const fn single(dtype: DType) -> Self {
        Self {
            bits: 1 << dtype as u8,
        }
    }

    /// Check if the set contains a dtype
    #[inline]
    pub const fn contains(self, dtype: DType) -> bool {
        self.bits & (1 << dtype as u8) != 0
    }

    /// Union of two sets
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_categories() {
        assert!(DType::F32.is_float());
        assert!(DType::BF16.is_float());
        assert!(!DType::I32.is_float());
        assert!(!DType::Bool.is_float());
    }

    #[test]
    fn test_dtype_set() {
        assert!(DTypeSet::FLOATS.contains(DType::F32));
        assert!(!DTypeSet::FLOATS.contains(DType::I32));
        assert!(DTypeSet::SIGNED_INTS.contains(DType::I8));
        assert!(!DTypeSet::SIGNED_INTS.contains(DType::U8));

        let set = DTypeSet::of(&[DType::I64, DType::Bool]);
        assert!(set.contains(DType::Bool));
        assert!(!set.contains(DType::I32));
        assert_eq!(
            set.union(DTypeSet::single(DType::I32)),
            DTypeSet::of(&[DType::I32, DType::I64, DType::Bool])
        );
    }

    #[test]
    fn test_int_bounds() {
        assert_eq!(DType::F32.int_upper_bound(), 1 << 24);
        assert_eq!(DType::BF16.int_lower_bound(), -256);
        assert_eq!(DType::U8.int_upper_bound(), 255);
        assert_eq!(DType::Bool.int_upper_bound(), 1);
        assert_eq!(DType::I64.int_lower_bound(), i64::MIN as i128);
    }
}
