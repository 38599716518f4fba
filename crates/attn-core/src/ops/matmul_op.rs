// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication operation.

use crate::{Shape, Tensor, TensorError};

/// Performs matrix multiplication on shape-tagged operands: `lhs @ rhs`.
///
/// Both inputs must be 2-D tensors with compatible inner dimensions:
/// `lhs` is `[M, K]`, `rhs` is `[K, N]`, and the result is `[M, N]`.
///
/// # Errors
/// Returns [`TensorError::DimensionMismatch`] if the operands are not rank 2
/// or their inner dimensions differ.
pub fn matmul(lhs: &Tensor, rhs: &Tensor) -> Result<Tensor, TensorError> {
    if !lhs.shape().is_matmul_compatible(rhs.shape()) {
        tracing::debug!("matmul rejected: {} x {}", lhs.shape(), rhs.shape());
        return Err(TensorError::DimensionMismatch {
            op: "matmul",
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    }

    let lhs_dims = lhs.shape().dims();
    let rhs_dims = rhs.shape().dims();
    let (m, k, n) = (lhs_dims[0], lhs_dims[1], rhs_dims[1]);
    tracing::trace!(m, k, n, "matmul");

    let mut output = Tensor::zeros(Shape::matrix(m, n));
    matmul_f64_generic(lhs.as_slice(), rhs.as_slice(), output.as_mut_slice(), m, k, n);
    Ok(output)
}

/// Multiplies two flattened row-major matrices with shapes inferred from
/// their lengths.
///
/// `b` is the square right operand of size `n × n` and `a` is read as
/// `rows × n`, so the product has the same length as `a`.
///
/// # Errors
/// Returns [`TensorError::DimensionMismatch`] if `b` is empty, if
/// `a.len()` is not a multiple of `b.len()`, or if `b.len()` is not a
/// perfect square.
///
/// # Examples
/// ```
/// use attn_core::multiply;
/// let c = multiply(&[1.0, 0.0, 0.0, 1.0], &[1.0, 0.0, 0.0, 1.0]).unwrap();
/// assert_eq!(c, vec![1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Vec<f64>, TensorError> {
    if b.is_empty() || a.len() % b.len() != 0 {
        tracing::debug!("multiply rejected: len(a)={} len(b)={}", a.len(), b.len());
        return Err(TensorError::length_mismatch("multiply", a.len(), b.len()));
    }

    let n = square_side(b.len()).ok_or_else(|| {
        tracing::debug!("multiply rejected: len(b)={} is not square", b.len());
        TensorError::length_mismatch("multiply", a.len(), b.len())
    })?;

    let lhs = Tensor::from_slice(Shape::matrix(a.len() / n, n), a)?;
    let rhs = Tensor::from_slice(Shape::matrix(n, n), b)?;
    Ok(matmul(&lhs, &rhs)?.into_vec())
}

/// Side length of a square with `len` elements, if there is one.
fn square_side(len: usize) -> Option<usize> {
    let side = (len as f64).sqrt().round() as usize;
    (side * side == len).then_some(side)
}

/// Portable f64 matrix multiplication.
///
/// Each output element is accumulated in a local sum over the contraction
/// index in ascending order, so results are deterministic for fixed inputs.
fn matmul_f64_generic(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum = 0.0;
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum += a_ip * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
