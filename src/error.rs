//! Error types for distfill

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using distfill's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or running a sampling kernel
///
/// Every variant is raised before the generator lock is taken and before the
/// first element is written, so a failed call leaves the destination untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Element type is outside the kernel's supported set
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Element type fails a distribution-specific precondition
    #[error("Invalid dtype {dtype:?} for operation '{op}': {reason}")]
    InvalidDType {
        /// The rejected dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
        /// Why the dtype is rejected
        reason: String,
    },

    /// Distribution parameter violates its domain
    #[error("Invalid parameter '{arg}': {reason}")]
    InvalidParameter {
        /// The parameter name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Dtype of a typed access does not match the view's dtype
    #[error("DType mismatch: view holds {expected:?}, accessed as {got:?}")]
    DTypeMismatch {
        /// Dtype stored in the view
        expected: DType,
        /// Dtype requested by the caller
        got: DType,
    },

    /// Buffer length does not match the requested shape
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shape {from:?} to {to:?}")]
    BroadcastError {
        /// Source shape
        from: Vec<usize>,
        /// Target shape
        to: Vec<usize>,
    },

    /// A strided layout reaches outside its buffer
    #[error("Layout reaches element {index} of a buffer holding {len} elements")]
    OutOfBounds {
        /// The out-of-range element offset (may be negative)
        index: isize,
        /// Length of the buffer in elements
        len: usize,
    },

    /// Dtype needs a cargo feature that is not enabled
    #[error("DType {dtype:?} requires the '{feature}' feature")]
    FeatureRequired {
        /// The dtype that was requested
        dtype: DType,
        /// The feature that must be enabled
        feature: &'static str,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create an invalid dtype error
    pub fn invalid_dtype(dtype: DType, op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidDType {
            dtype,
            op,
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a broadcast error
    pub fn broadcast(from: &[usize], to: &[usize]) -> Self {
        Self::BroadcastError {
            from: from.to_vec(),
            to: to.to_vec(),
        }
    }
}
