// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors and dimension utilities.

use std::fmt;

/// Describes the dimensionality of a [`crate::Tensor`].
///
/// Shapes are immutable once created. Dimension checks in the ops compare
/// shapes structurally instead of inferring them from buffer lengths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use attn_core::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements(), 24);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// Creates a 2-D shape (matrix).
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    ///
    /// For a rank-0 shape, returns 1.
    pub fn num_elements(&self) -> usize {
        if self.dims.is_empty() {
            1
        } else {
            self.dims.iter().product()
        }
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the size of a specific dimension, or `None` if out of bounds.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.get(index).copied()
    }

    /// Returns the size of the last dimension, or `None` for rank 0.
    pub fn last_dim(&self) -> Option<usize> {
        self.dims.last().copied()
    }

    /// Returns `true` if the shapes are compatible for a matrix multiply:
    /// both are rank 2, `self` is `[M, K]` and `other` is `[K, N]`.
    pub fn is_matmul_compatible(&self, other: &Shape) -> bool {
        self.rank() == 2 && other.rank() == 2 && self.dims[1] == other.dims[0]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_shape() {
        let s = Shape::vector(5);
        assert_eq!(s.rank(), 1);
        assert_eq!(s.num_elements(), 5);
        assert_eq!(s.last_dim(), Some(5));
    }

    #[test]
    fn test_matrix_shape() {
        let s = Shape::matrix(3, 4);
        assert_eq!(s.rank(), 2);
        assert_eq!(s.num_elements(), 12);
        assert_eq!(s.dim(0), Some(3));
        assert_eq!(s.dim(2), None);
    }

    #[test]
    fn test_rank0() {
        let s = Shape::new(vec![]);
        assert_eq!(s.num_elements(), 1);
        assert_eq!(s.last_dim(), None);
    }

    #[test]
    fn test_matmul_compatible() {
        let a = Shape::matrix(3, 4);
        let b = Shape::matrix(4, 5);
        assert!(a.is_matmul_compatible(&b));

        let c = Shape::matrix(5, 5);
        assert!(!a.is_matmul_compatible(&c));

        // Rank-1 operands never qualify.
        assert!(!Shape::vector(4).is_matmul_compatible(&b));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Shape::new(vec![2, 3, 4])), "[2, 3, 4]");
        assert_eq!(format!("{}", Shape::vector(0)), "[0]");
    }
}
