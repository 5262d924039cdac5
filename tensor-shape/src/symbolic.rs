use super::*;
use crate::display::write_braced;
use std::fmt;

/// One axis of a symbolic shape as produced by a shape inference pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolicDim {
    /// Concrete extent.
    Value(i64),
    /// Named symbolic parameter, e.g. a batch size `N`.
    Param(String),
    /// Neither a value nor a parameter is known.
    Unset,
}

impl SymbolicDim {
    pub fn value(value: i64) -> Self {
        Self::Value(value)
    }

    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn as_value(&self) -> Option<i64> {
        if let Self::Value(value) = self {
            Some(*value)
        } else {
            None
        }
    }
}

impl From<i64> for SymbolicDim {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for SymbolicDim {
    fn from(name: &str) -> Self {
        Self::Param(name.to_owned())
    }
}

impl fmt::Display for SymbolicDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Param(name) => f.write_str(name),
            Self::Unset => Ok(()),
        }
    }
}

/// A shape descriptor whose axes may be named parameters instead of concrete extents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SymbolicShape {
    dims: Vec<SymbolicDim>,
}

impl SymbolicShape {
    pub fn new(dims: Vec<SymbolicDim>) -> Self {
        Self { dims }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[SymbolicDim] {
        &self.dims
    }

    /// Concrete view of this descriptor: every axis without a value becomes unknown (`-1`).
    pub fn to_shape(&self) -> Shape {
        self.dims
            .iter()
            .map(|dim| dim.as_value().unwrap_or(-1))
            .collect()
    }
}

impl FromIterator<SymbolicDim> for SymbolicShape {
    fn from_iter<I: IntoIterator<Item = SymbolicDim>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<const N: usize> From<&Shape<N>> for SymbolicShape {
    fn from(shape: &Shape<N>) -> Self {
        shape.iter().map(SymbolicDim::Value).collect()
    }
}

impl fmt::Display for SymbolicShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, &self.dims)
    }
}
