use super::*;
use tracing::{debug, warn};

impl<const N: usize> Shape<N> {
    /// Returns the total number of elements.
    ///
    /// A rank 0 shape has exactly one element. Returns `-1` if any extent is unknown.
    pub fn size(&self) -> Result<i64> {
        self.size_helper(0, self.rank())
    }

    /// Returns the product of extents `[0, dimension)`, or `-1` if one of them is unknown.
    /// Fails with [`ShapeError::InvalidDimension`] when `dimension > rank`.
    pub fn size_to_dimension(&self, dimension: usize) -> Result<i64> {
        self.check_dimension("size_to_dimension", dimension)?;
        self.size_helper(0, dimension)
    }

    /// Returns the product of extents `[dimension, rank)`, or `-1` if one of them is unknown.
    /// Fails with [`ShapeError::InvalidDimension`] when `dimension > rank`.
    pub fn size_from_dimension(&self, dimension: usize) -> Result<i64> {
        self.check_dimension("size_from_dimension", dimension)?;
        self.size_helper(dimension, self.rank())
    }

    fn check_dimension(&self, op: &'static str, dimension: usize) -> Result<()> {
        let rank = self.rank();
        if dimension > rank {
            debug!(op, dimension, rank, "dimension past tensor rank");
            return Err(ShapeError::InvalidDimension {
                op,
                dimension,
                rank,
            });
        }
        Ok(())
    }

    // Must return 1 for an empty range. The first unknown extent ends the scan with -1.
    fn size_helper(&self, start: usize, end: usize) -> Result<i64> {
        let dims = &self.dims()[start..end];

        let mut size: i64 = 1;
        for (i, &dim) in dims.iter().enumerate() {
            if dim < 0 {
                return Ok(-1);
            }

            size = match size.checked_mul(dim) {
                Some(size) => size,
                // an unknown or empty axis later in the range still wins over overflow
                None if dims[i + 1..].iter().any(|&dim| dim < 0) => return Ok(-1),
                None if dims[i + 1..].contains(&0) => return Ok(0),
                None => {
                    warn!(shape = %self, start, end, "element count overflow");
                    return Err(ShapeError::Overflow {
                        shape: self.to_string(),
                    });
                }
            };
        }

        Ok(size)
    }
}
