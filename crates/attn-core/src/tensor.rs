// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core shape-tagged tensor type.

use crate::{Shape, TensorError};

/// An owned, shape-tagged `f64` tensor stored in contiguous memory.
///
/// # Memory Layout
/// Data is stored in row-major (C) order. The buffer length always equals
/// `shape.num_elements()`; constructors reject anything else.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f64>,
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// # Examples
    /// ```
    /// use attn_core::{Tensor, Shape};
    /// let t = Tensor::zeros(Shape::matrix(2, 3));
    /// assert_eq!(t.len(), 6);
    /// ```
    pub fn zeros(shape: Shape) -> Self {
        let len = shape.num_elements();
        Self {
            shape,
            data: vec![0.0; len],
        }
    }

    /// Creates a tensor from an owned buffer.
    ///
    /// # Errors
    /// Returns [`TensorError::BufferSizeMismatch`] if `data.len()` does not
    /// match `shape.num_elements()`.
    ///
    /// # Examples
    /// ```
    /// use attn_core::{Tensor, Shape};
    /// let t = Tensor::from_vec(Shape::vector(3), vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_vec(shape: Shape, data: Vec<f64>) -> Result<Self, TensorError> {
        let expected = shape.num_elements();
        if data.len() != expected {
            return Err(TensorError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a tensor by copying a slice.
    pub fn from_slice(shape: Shape, values: &[f64]) -> Result<Self, TensorError> {
        Self::from_vec(shape, values.to_vec())
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row count of a rank-2 tensor.
    pub fn rows(&self) -> Option<usize> {
        self.shape.dim(0).filter(|_| self.shape.rank() == 2)
    }

    /// Column count of a rank-2 tensor.
    pub fn cols(&self) -> Option<usize> {
        self.shape.dim(1).filter(|_| self.shape.rank() == 2)
    }

    /// Returns the element buffer in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the tensor and returns its flat buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Reinterprets the buffer with a new shape of the same element count.
    ///
    /// # Errors
    /// Returns [`TensorError::BufferSizeMismatch`] if the element counts differ.
    pub fn reshape(self, shape: Shape) -> Result<Self, TensorError> {
        Self::from_vec(shape, self.data)
    }
}

/// A plain `Vec<f64>` becomes a rank-1 tensor.
impl From<Vec<f64>> for Tensor {
    fn from(data: Vec<f64>) -> Self {
        Self {
            shape: Shape::vector(data.len()),
            data,
        }
    }
}
