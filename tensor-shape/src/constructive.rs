use super::*;

impl<const N: usize> Shape<N> {
    /// Creates a shape by copying the given extents as-is.
    /// Negative extents are kept: they mark axes of unknown size.
    pub fn new(dims: &[i64]) -> Self {
        Self {
            dims: SmallVec::from_slice(dims),
        }
    }

    /// Creates a rank 0 shape, which describes exactly one element.
    pub fn scalar() -> Self {
        Self {
            dims: SmallVec::new(),
        }
    }

    /// Creates a shape by copying `count` contiguous extents starting at `ptr`.
    ///
    /// # Safety
    /// When `count` is non-zero, `ptr` must be non-null, aligned, and valid for reads of `count`
    /// consecutive `i64` values. The memory only needs to stay valid for the duration of the call.
    pub unsafe fn from_raw_parts(ptr: *const i64, count: usize) -> Self {
        if count == 0 {
            return Self::scalar();
        }

        // SAFETY: the caller guarantees `ptr` is valid for `count` reads.
        let dims = unsafe { std::slice::from_raw_parts(ptr, count) };
        Self::new(dims)
    }

    /// Copies extents `[start, end)` of `source` into a new shape.
    /// Callers must ensure `start <= end <= source.rank()`; `slice` is the checked entry point.
    pub(crate) fn from_range(source: &Shape<N>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= source.rank());
        Self::new(&source.dims[start..end])
    }
}

impl<const N: usize> Default for Shape<N> {
    fn default() -> Self {
        Self::scalar()
    }
}

impl<const N: usize> From<&[i64]> for Shape<N> {
    fn from(dims: &[i64]) -> Self {
        Self::new(dims)
    }
}

impl<const N: usize> From<Vec<i64>> for Shape<N> {
    fn from(dims: Vec<i64>) -> Self {
        Self::new(&dims)
    }
}

impl<const N: usize, const K: usize> From<[i64; K]> for Shape<N> {
    fn from(dims: [i64; K]) -> Self {
        Self::new(&dims)
    }
}

impl<const N: usize> FromIterator<i64> for Shape<N> {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            dims: iter.into_iter().collect(),
        }
    }
}
