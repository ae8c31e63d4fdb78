//! Shared constants and algorithm definitions for the SIMD math functions
//!
//! Only single-precision `log`, `sin` and `cos` are needed by the Box-Muller
//! transform, so only their coefficients live here.

// ============================================================================
// Polynomial Coefficients for log(x)
// ============================================================================

/// Odd series coefficients for log(m) = 2 atanh(s), s = (m - 1) / (m + 1)
///
/// With the mantissa normalized to [sqrt(2)/2, sqrt(2)], |s| <= 0.1716 and
/// the series truncated after s⁹ is within 1e-9 of log(m).
pub mod log_coefficients {
    pub const L1_F32: f32 = 2.0;
    pub const L3_F32: f32 = 2.0 / 3.0;
    pub const L5_F32: f32 = 2.0 / 5.0;
    pub const L7_F32: f32 = 2.0 / 7.0;
    pub const L9_F32: f32 = 2.0 / 9.0;

    // IEEE 754 bit manipulation constants
    pub const EXP_BIAS_F32: i32 = 127;
    pub const MANTISSA_MASK_F32: i32 = 0x007F_FFFF;
    pub const EXP_ZERO_F32: i32 = 0x3F80_0000; // exponent = 127 (bias)
}

// ============================================================================
// Polynomial Coefficients for sin/cos
// ============================================================================

/// Taylor series coefficients for sin(y) and cos(y) on [-π/4, π/4]
/// sin(y) ≈ y - y³/3! + y⁵/5! - y⁷/7!
/// cos(y) ≈ 1 - y²/2! + y⁴/4! - y⁶/6! + y⁸/8!
pub mod trig_coefficients {
    pub const S1_F32: f32 = 1.0;
    pub const S3_F32: f32 = -1.0 / 6.0;
    pub const S5_F32: f32 = 1.0 / 120.0;
    pub const S7_F32: f32 = -1.0 / 5040.0;

    pub const C0_F32: f32 = 1.0;
    pub const C2_F32: f32 = -0.5;
    pub const C4_F32: f32 = 1.0 / 24.0;
    pub const C6_F32: f32 = -1.0 / 720.0;
    pub const C8_F32: f32 = 1.0 / 40320.0;
}

// ============================================================================
// Algorithm Documentation
// ============================================================================

/// Algorithm for log(x):
///
/// 1. **Decomposition**: x = 2^n * m where m in [1, 2)
///    - Extract exponent n from IEEE 754 representation
///    - Extract mantissa m, normalized to [1, 2)
///
/// 2. **Range normalization**: If m > √2, divide by 2 and increment n
///    - This keeps f = m - 1 in [-0.2929, 0.4142]
///
/// 3. **Series**: s = f / (2 + f), log(m) ≈ s * (l₁ + s²*(l₃ + s²*(l₅ + ...)))
///
/// 4. **Reconstruction**: result = n * ln(2) + log(m)
///
/// # Accuracy
/// Absolute error within a few f32 ulps for positive normal inputs. The Box-Muller inputs
/// are `1 - u` with `u` on a 24-bit grid, so they never go below 2^-24.
pub const _LOG_ALGORITHM_DOC: () = ();

/// Algorithm for sin(x) and cos(x):
///
/// 1. **Range reduction**: j = round(x * 2/π), y = x - j * π/2
///
/// 2. **Taylor polynomials** of sin(y) (to y⁷) and cos(y) (to y⁸)
///
/// 3. **Quadrant selection** on j mod 4:
///    - 0: sin(x) = sin(y)
///    - 1: sin(x) = cos(y)
///    - 2: sin(x) = -sin(y)
///    - 3: sin(x) = -cos(y)
///
/// cos(x) is evaluated as sin(x + π/2).
///
/// # Accuracy
/// Absolute error below 1e-6 on [0, 2π], the only range the Box-Muller
/// angle takes.
pub const _TRIG_ALGORITHM_DOC: () = ();
