//! Element views and layouts
//!
//! The kernels in this crate write into caller-owned memory. This module
//! provides the borrowed views they accept ([`TensorMut`], [`TensorRef`]), the
//! [`Layout`] describing shape and strides, and the storage-order iteration
//! used whenever a view is not one dense run.

mod iter;
mod layout;
mod view;

pub use layout::{Layout, Shape, Strides};
pub use view::{TensorMut, TensorRef, TypedMut, TypedRef};
