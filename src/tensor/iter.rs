//! Storage-order element iteration over one or more same-shape layouts

use super::layout::{Layout, Shape, Strides};

/// Iterator over the element offsets of `N` layouts walked in lockstep
///
/// The visiting order is the storage order of the first layout (see
/// [`Layout::storage_order`]); the remaining layouts follow the same logical
/// indices, which is how a broadcast parameter view is paired with its output.
pub(crate) struct StridedOffsets<const N: usize> {
    shape: Shape,
    strides: [Strides; N],
    counters: Shape,
    current: [isize; N],
    remaining: usize,
}

impl<const N: usize> StridedOffsets<N> {
    /// All layouts must share the first layout's shape.
    pub(crate) fn new(layouts: [&Layout; N]) -> Self {
        let order = layouts[0].storage_order();
        debug_assert!(layouts.iter().all(|l| l.shape() == layouts[0].shape()));

        let shape: Shape = order.iter().map(|&d| layouts[0].shape()[d]).collect();
        let strides: [Strides; N] =
            std::array::from_fn(|k| order.iter().map(|&d| layouts[k].strides()[d]).collect());
        let current: [isize; N] = std::array::from_fn(|k| layouts[k].offset() as isize);

        Self {
            counters: smallvec::smallvec![0; shape.len()],
            remaining: layouts[0].elem_count(),
            shape,
            strides,
            current,
        }
    }

    fn advance(&mut self) {
        for d in (0..self.shape.len()).rev() {
            self.counters[d] += 1;
            for k in 0..N {
                self.current[k] += self.strides[k][d];
            }
            if self.counters[d] < self.shape[d] {
                return;
            }
            // Carry: rewind this dimension and step the next outer one
            for k in 0..N {
                self.current[k] -= self.strides[k][d] * self.shape[d] as isize;
            }
            self.counters[d] = 0;
        }
    }
}

impl<const N: usize> Iterator for StridedOffsets<N> {
    type Item = [usize; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.current.map(|off| off as usize);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for StridedOffsets<N> {}
