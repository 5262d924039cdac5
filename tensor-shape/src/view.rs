use super::*;
use std::ops::Index;
use tracing::debug;

impl<const N: usize> Shape<N> {
    /// Number of axes. Zero for a scalar.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Alias of [`Shape::rank`].
    pub fn num_dimensions(&self) -> usize {
        self.rank()
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    // Get extents
    pub fn dims(&self) -> &[i64] {
        self.dims.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.dims.iter().copied()
    }

    /// Returns true if at least one axis has an unknown (negative) extent.
    pub fn has_unknown_dims(&self) -> bool {
        self.dims.iter().any(|&dim| dim < 0)
    }

    /// Get extent of a single axis
    pub fn dim(&self, index: usize) -> Result<i64> {
        match self.dims.get(index) {
            Some(&dim) => Ok(dim),
            None => {
                debug!(index, rank = self.rank(), "dimension index out of range");
                Err(ShapeError::InvalidDimension {
                    op: "dim",
                    dimension: index,
                    rank: self.rank(),
                })
            }
        }
    }

    /// Copies all extents into the front of `out`, which must hold at least `rank` values.
    pub fn copy_dims(&self, out: &mut [i64]) -> Result<()> {
        if out.len() < self.rank() {
            debug!(needed = self.rank(), actual = out.len(), "copy_dims target too small");
            return Err(ShapeError::BufferTooSmall {
                needed: self.rank(),
                actual: out.len(),
            });
        }

        out[..self.rank()].copy_from_slice(self.dims());
        Ok(())
    }
}

impl<const N: usize> Index<usize> for Shape<N> {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.dims()[index]
    }
}

impl<const N: usize> AsRef<[i64]> for Shape<N> {
    fn as_ref(&self) -> &[i64] {
        self.dims()
    }
}
