use super::*;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<const N: usize> PartialEq for Shape<N> {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims
    }
}

impl<const N: usize> Eq for Shape<N> {}

impl<const N: usize> Hash for Shape<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims.hash(state);
    }
}

impl<const N: usize> fmt::Debug for Shape<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape").field("dims", &self.dims()).finish()
    }
}
