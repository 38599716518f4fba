// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor operations.

use crate::Shape;

/// Errors that can occur during tensor operations.
///
/// Every variant is raised by a precondition check at call entry, so an
/// operation either returns a complete result or one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TensorError {
    /// The provided buffer length does not match the element count of the shape.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Two operands have incompatible dimensions for the requested operation.
    #[error("dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A zero-length input was given where a non-empty one is required.
    #[error("empty input to {op}")]
    EmptyInput { op: &'static str },

    /// A NaN entry reached an operation that cannot normalise it.
    #[error("NaN at index {index} in {op}")]
    NotANumber { op: &'static str, index: usize },

    /// The attention scale is zero or not finite.
    #[error("invalid scale factor {scale}: must be finite and non-zero")]
    InvalidScale { scale: f64 },
}

impl TensorError {
    /// Shorthand for a mismatch between two rank-1 operands of the given lengths.
    pub(crate) fn length_mismatch(op: &'static str, lhs: usize, rhs: usize) -> Self {
        Self::DimensionMismatch {
            op,
            lhs: Shape::vector(lhs),
            rhs: Shape::vector(rhs),
        }
    }
}
