//! Borrowed element views handed to the sampling kernels
//!
//! A view pairs a caller-owned buffer with a runtime [`DType`] and a
//! [`Layout`]. Kernels never allocate: they dispatch on the dtype, take a typed
//! view of the same buffer, and either fill the contiguous run directly or
//! walk the layout in storage order.

use super::iter::StridedOffsets;
use super::layout::Layout;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

/// Check that `layout` is well formed and every offset it reaches lies inside
/// a buffer of `len`
fn check_bounds(layout: &Layout, len: usize) -> Result<()> {
    if layout.shape().len() != layout.strides().len() {
        return Err(Error::invalid_parameter(
            "layout",
            format!(
                "shape has {} dimensions but strides have {}",
                layout.shape().len(),
                layout.strides().len()
            ),
        ));
    }
    if layout.elem_count() == 0 {
        return Ok(());
    }
    let (lo, hi) = layout.offset_range().ok_or(Error::OutOfBounds {
        index: isize::MAX,
        len,
    })?;
    if lo < 0 {
        return Err(Error::OutOfBounds { index: lo, len });
    }
    if hi as usize >= len {
        return Err(Error::OutOfBounds { index: hi, len });
    }
    Ok(())
}

fn cast_bytes_mut<T: Element>(bytes: &mut [u8]) -> Result<&mut [T]> {
    bytemuck::try_cast_slice_mut(bytes).map_err(|e| Error::Internal(format!("{e:?}")))
}

fn cast_bytes<T: Element>(bytes: &[u8]) -> Result<&[T]> {
    bytemuck::try_cast_slice(bytes).map_err(|e| Error::Internal(format!("{e:?}")))
}

// ============================================================================
// Mutable view
// ============================================================================

/// Mutable, runtime-typed view over a caller-owned buffer
///
/// # Example
/// ```
/// use distfill::tensor::TensorMut;
/// use distfill::dtype::DType;
///
/// let mut data = vec![0.0f32; 6];
/// let view = TensorMut::from_slice(&mut data, &[2, 3]).unwrap();
/// assert_eq!(view.dtype(), DType::F32);
/// assert!(view.is_contiguous());
/// ```
pub struct TensorMut<'a> {
    data: &'a mut [u8],
    len: usize,
    dtype: DType,
    layout: Layout,
}

impl<'a> TensorMut<'a> {
    /// View a whole slice as a contiguous tensor of the given shape
    pub fn from_slice<T: Element>(data: &'a mut [T], shape: &[usize]) -> Result<Self> {
        let layout = Layout::contiguous(shape);
        if layout.elem_count() != data.len() {
            return Err(Error::shape_mismatch(shape, &[data.len()]));
        }
        Self::from_strided(data, layout)
    }

    /// View a slice through an arbitrary strided layout
    ///
    /// Fails with `OutOfBounds` if the layout reaches outside the slice.
    pub fn from_strided<T: Element>(data: &'a mut [T], layout: Layout) -> Result<Self> {
        check_bounds(&layout, data.len())?;
        Ok(Self {
            len: data.len(),
            data: bytemuck::cast_slice_mut(data),
            dtype: T::DTYPE,
            layout,
        })
    }

    /// Element type held by the view
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Layout of the view
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shape of the view
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Number of logical elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Whether the logical elements form one dense run
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Length of the underlying buffer in elements
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.len
    }

    /// Typed access to the view
    ///
    /// Fails with `DTypeMismatch` unless `T` is the view's element type.
    pub fn typed<T: Element>(&mut self) -> Result<TypedMut<'_, T>> {
        if T::DTYPE != self.dtype {
            return Err(Error::DTypeMismatch {
                expected: self.dtype,
                got: T::DTYPE,
            });
        }
        Ok(TypedMut {
            data: cast_bytes_mut(self.data)?,
            layout: &self.layout,
        })
    }
}

/// Typed mutable view produced by [`TensorMut::typed`]
pub struct TypedMut<'v, T> {
    data: &'v mut [T],
    layout: &'v Layout,
}

impl<T: Element> TypedMut<'_, T> {
    /// Number of logical elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// The dense run of elements, if the layout is contiguous
    ///
    /// Views with no elements yield an empty run whatever their offset.
    pub fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        if !self.layout.is_contiguous() {
            return None;
        }
        if self.layout.elem_count() == 0 {
            return Some(&mut []);
        }
        let start = self.layout.offset();
        let end = start + self.layout.elem_count();
        Some(&mut self.data[start..end])
    }

    /// Write `f()` into every logical element, in iteration order
    pub fn fill_with(&mut self, mut f: impl FnMut() -> T) {
        if let Some(run) = self.as_contiguous_mut() {
            for elem in run.iter_mut() {
                *elem = f();
            }
            return;
        }
        for [off] in StridedOffsets::new([self.layout]) {
            self.data[off] = f();
        }
    }

    /// Write `f(param)` into every logical element
    ///
    /// `params` must have this view's shape (broadcast beforehand); elements
    /// are visited in this view's iteration order.
    pub fn zip_fill_with<P: Element>(&mut self, params: &TypedRef<'_, P>, mut f: impl FnMut(P) -> T) {
        debug_assert_eq!(self.layout.shape(), params.layout.shape());
        for [out, p] in StridedOffsets::new([self.layout, params.layout]) {
            self.data[out] = f(params.data[p]);
        }
    }
}

// ============================================================================
// Read-only view
// ============================================================================

/// Read-only, runtime-typed view over a caller-owned buffer
pub struct TensorRef<'a> {
    data: &'a [u8],
    len: usize,
    dtype: DType,
    layout: Layout,
}

impl<'a> TensorRef<'a> {
    /// View a whole slice as a contiguous tensor of the given shape
    pub fn from_slice<T: Element>(data: &'a [T], shape: &[usize]) -> Result<Self> {
        let layout = Layout::contiguous(shape);
        if layout.elem_count() != data.len() {
            return Err(Error::shape_mismatch(shape, &[data.len()]));
        }
        Self::from_strided(data, layout)
    }

    /// View a slice through an arbitrary strided layout
    pub fn from_strided<T: Element>(data: &'a [T], layout: Layout) -> Result<Self> {
        check_bounds(&layout, data.len())?;
        Ok(Self {
            len: data.len(),
            data: bytemuck::cast_slice(data),
            dtype: T::DTYPE,
            layout,
        })
    }

    /// Element type held by the view
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Layout of the view
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shape of the view
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Number of logical elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Expand to `shape` with zero strides on broadcast dimensions
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<TensorRef<'a>> {
        let layout = self
            .layout
            .broadcast_to(shape)
            .ok_or_else(|| Error::broadcast(self.layout.shape(), shape))?;
        Ok(TensorRef {
            data: self.data,
            len: self.len,
            dtype: self.dtype,
            layout,
        })
    }

    /// Typed access to the view
    pub fn typed<T: Element>(&self) -> Result<TypedRef<'_, T>> {
        if T::DTYPE != self.dtype {
            return Err(Error::DTypeMismatch {
                expected: self.dtype,
                got: T::DTYPE,
            });
        }
        Ok(TypedRef {
            data: cast_bytes(self.data)?,
            layout: &self.layout,
        })
    }
}

/// Typed read-only view produced by [`TensorRef::typed`]
pub struct TypedRef<'v, T> {
    data: &'v [T],
    layout: &'v Layout,
}

impl<T: Element> TypedRef<'_, T> {
    /// Visit every logical element in storage order
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        StridedOffsets::new([self.layout]).map(move |[off]| self.data[off])
    }
}
