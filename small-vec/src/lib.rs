use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A vector of plain `Copy` values that keeps up to N elements inline
/// and falls back to heap allocation for longer sequences.
///
/// Elements can be appended while the vector is being built, but there is no API to
/// remove, reorder or overwrite them: once handed out, the contents are read-only.
#[derive(Clone)]
pub struct SmallVec<T, const N: usize> {
    data: SmallVecData<T, N>,
    len: usize,
}

#[derive(Clone)]
enum SmallVecData<T, const N: usize> {
    Stack([T; N]),
    Heap(Vec<T>),
}

impl<T: Copy + Default, const N: usize> SmallVec<T, N> {
    /// Creates a new empty SmallVec
    pub fn new() -> Self {
        Self {
            data: SmallVecData::Stack([T::default(); N]),
            len: 0,
        }
    }

    /// Creates a SmallVec holding a copy of the given slice.
    /// Slices longer than N go straight to the heap.
    pub fn from_slice(items: &[T]) -> Self {
        if items.len() > N {
            return Self {
                data: SmallVecData::Heap(items.to_vec()),
                len: items.len(),
            };
        }

        let mut arr = [T::default(); N];
        arr[..items.len()].copy_from_slice(items);

        Self {
            data: SmallVecData::Stack(arr),
            len: items.len(),
        }
    }

    /// Adds an element to the end of the SmallVec
    pub fn push(&mut self, value: T) {
        if self.len == N {
            self.spill_to_heap();
        }

        match &mut self.data {
            SmallVecData::Stack(arr) => arr[self.len] = value,
            SmallVecData::Heap(vec) => vec.push(value),
        }
        self.len += 1;
    }

    /// Converts stack storage to heap storage
    fn spill_to_heap(&mut self) {
        if let SmallVecData::Stack(arr) = &self.data {
            let mut vec = Vec::with_capacity(N * 2);
            vec.extend_from_slice(&arr[..self.len]);
            self.data = SmallVecData::Heap(vec);
        }
    }
}

impl<T, const N: usize> SmallVec<T, N> {
    /// Returns the number of elements in the SmallVec
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SmallVec is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the initialized elements as a slice
    pub fn as_slice(&self) -> &[T] {
        match &self.data {
            SmallVecData::Stack(arr) => &arr[..self.len],
            SmallVecData::Heap(vec) => vec.as_slice(),
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for SmallVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for SmallVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for SmallVec<T, N> {}

// Must agree with PartialEq: only the initialized prefix participates.
impl<T: Hash, const N: usize> Hash for SmallVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for SmallVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Copy + Default, const N: usize> FromIterator<T> for SmallVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sv = Self::new();
        for item in iter {
            sv.push(item);
        }
        sv
    }
}

impl<T, const N: usize> Deref for SmallVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
