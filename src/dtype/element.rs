//! Element trait for mapping Rust types to DType

use super::{Bool, DType};
use bytemuck::{Pod, Zeroable};

/// Trait for types that can be elements of a view
///
/// Connects Rust's type system to the runtime dtype system and carries the
/// per-type facts the samplers need: how many bits of a random word the type
/// can absorb, and how a double-precision or 64-bit integer sample is cast
/// down on store.
///
/// # Bounds
/// - `Copy + Clone + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe reinterpretation of the view's byte storage
/// - `PartialOrd` - Range checks in tests and validation
pub trait Element: Copy + Clone + Send + Sync + Pod + Zeroable + 'static + PartialOrd {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Bits of precision a random draw can fill
    ///
    /// Mantissa digits (implicit bit included) for floats, value bits for
    /// integers, 1 for bool.
    const RANDOM_BITS: u32;

    /// Whether integer-range sampling may use a full 64-bit draw
    ///
    /// True for the types able to hold samples from ranges of 2^32 values or
    /// more, and for which the full 64-bit range fill is defined.
    const WIDE_RANGE: bool;

    /// Convert to f64
    fn to_f64(self) -> f64;

    /// Convert from f64 (truncating toward zero for integers, saturating)
    fn from_f64(v: f64) -> Self;

    /// Convert from i64 (two's-complement wrap for integers)
    fn from_i64(v: i64) -> Self;
}

macro_rules! impl_int_element {
    ($($t:ty => $dtype:ident, $bits:expr, $wide:expr);* $(;)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;
                const RANDOM_BITS: u32 = $bits;
                const WIDE_RANGE: bool = $wide;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn from_i64(v: i64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_int_element! {
    i64 => I64, 63, true;
    i32 => I32, 31, false;
    i16 => I16, 15, false;
    i8 => I8, 7, false;
    u64 => U64, 64, false;
    u32 => U32, 32, false;
    u16 => U16, 16, false;
    u8 => U8, 8, false;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
    const RANDOM_BITS: u32 = f64::MANTISSA_DIGITS;
    const WIDE_RANGE: bool = true;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        v as f64
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
    const RANDOM_BITS: u32 = f32::MANTISSA_DIGITS;
    const WIDE_RANGE: bool = true;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        v as f32
    }
}

impl Element for Bool {
    const DTYPE: DType = DType::Bool;
    const RANDOM_BITS: u32 = 1;
    const WIDE_RANGE: bool = false;

    #[inline]
    fn to_f64(self) -> f64 {
        self.0 as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Bool::new(v != 0.0)
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        Bool::new(v != 0)
    }
}

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;
    const RANDOM_BITS: u32 = half::f16::MANTISSA_DIGITS;
    const WIDE_RANGE: bool = false;

    #[inline]
    fn to_f64(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        half::f16::from_f64(v as f64)
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;
    const RANDOM_BITS: u32 = half::bf16::MANTISSA_DIGITS;
    const WIDE_RANGE: bool = true;

    #[inline]
    fn to_f64(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::bf16::from_f64(v)
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        half::bf16::from_f64(v as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_dtype() {
        assert_eq!(f64::DTYPE, DType::F64);
        assert_eq!(f32::DTYPE, DType::F32);
        assert_eq!(i32::DTYPE, DType::I32);
        assert_eq!(u8::DTYPE, DType::U8);
        assert_eq!(Bool::DTYPE, DType::Bool);
    }

    #[test]
    fn test_element_digits() {
        assert_eq!(f64::RANDOM_BITS, 53);
        assert_eq!(f32::RANDOM_BITS, 24);
        assert_eq!(i64::RANDOM_BITS, 63);
        assert_eq!(u8::RANDOM_BITS, 8);
        assert_eq!(Bool::RANDOM_BITS, 1);
    }

    #[test]
    fn test_element_conversions() {
        assert_eq!(f32::from_f64(2.5).to_f64(), 2.5);
        assert_eq!(i32::from_f64(42.9), 42);
        assert_eq!(u8::from_i64(300), 44);
        assert_eq!(i8::from_i64(-1), -1);
        assert_eq!(Bool::from_i64(5), Bool::TRUE);
        assert_eq!(Bool::from_f64(0.0), Bool::FALSE);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_half_element() {
        assert_eq!(half::f16::RANDOM_BITS, 11);
        assert_eq!(half::bf16::RANDOM_BITS, 8);
        assert!(half::bf16::WIDE_RANGE);
        assert!(!half::f16::WIDE_RANGE);
        assert_eq!(half::f16::from_i64(3).to_f64(), 3.0);
    }
}
