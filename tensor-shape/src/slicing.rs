use super::*;
use std::ops::{Bound, RangeBounds};
use tracing::debug;

impl<const N: usize> Shape<N> {
    /// Returns a new shape holding extents `[start, end)`.
    /// Fails with [`ShapeError::InvalidSlice`] unless `start <= end <= rank`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Shape<N>> {
        let rank = self.rank();
        if start > end || end > rank {
            debug!(start, end, rank, "invalid tensor shape slice argument");
            return Err(ShapeError::InvalidSlice { start, end, rank });
        }

        Ok(Shape::from_range(self, start, end))
    }

    /// Returns a new shape holding extents `[start, rank)`.
    pub fn slice_from(&self, start: usize) -> Result<Shape<N>> {
        self.slice(start, self.rank())
    }

    /// Slices with range syntax: `shape.slice_range(1..)`, `shape.slice_range(..=1)` and so on.
    pub fn slice_range<R: RangeBounds<usize>>(&self, range: R) -> Result<Shape<N>> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.rank(),
        };

        self.slice(start, end)
    }
}
