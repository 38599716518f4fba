// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scaled attention over single vectors.
//!
//! This is the simplified single-head, unbatched form:
//!
//! - the score for query position `i` is the cross term
//!   `Σ_j q[i] * k[j] / scale`, not a per-position dot product;
//! - every output position receives the same weighted sum `Σ_j w[j] * v[j]`.
//!
//! Both reductions are kept exactly as stated; the output is therefore
//! constant across positions.

use super::softmax;
use crate::TensorError;

/// The conventional scale for a key of the given length: `sqrt(key_len)`.
pub fn default_scale(key_len: usize) -> f64 {
    (key_len as f64).sqrt()
}

/// Computes the softmax-normalised attention weights for `q` against `k`.
///
/// Returns one weight per query position.
///
/// # Errors
/// - [`TensorError::DimensionMismatch`] if `q.len() != k.len()`.
/// - [`TensorError::InvalidScale`] if `scale` is zero, NaN, or infinite.
/// - [`TensorError::EmptyInput`] from softmax if `q` is empty.
/// - [`TensorError::NotANumber`] from softmax if a score is NaN, which
///   happens when overflowing products of opposite sign meet in one sum.
pub fn attention_weights(q: &[f64], k: &[f64], scale: f64) -> Result<Vec<f64>, TensorError> {
    check_query_key(q, k, scale)?;
    weights_unchecked(q, k, scale)
}

/// Computes scaled attention and returns a vector of length `v.len()`.
///
/// # Errors
/// - [`TensorError::DimensionMismatch`] if `q.len() != k.len()`, or if `v`
///   is shorter than `q` (each weight needs a matching value).
/// - [`TensorError::InvalidScale`] if `scale` is zero, NaN, or infinite.
/// - [`TensorError::EmptyInput`] if `v` is empty, or from softmax if `q`
///   is empty.
/// - [`TensorError::NotANumber`] from softmax if a score is NaN.
///
/// Scores that overflow to `±inf` still yield a valid weight distribution.
///
/// # Examples
/// ```
/// use attn_core::{attention, default_scale};
/// let out = attention(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0], default_scale(3)).unwrap();
/// assert_eq!(out.len(), 3);
/// assert_eq!(out[0], out[2]);
/// ```
pub fn attention(q: &[f64], k: &[f64], v: &[f64], scale: f64) -> Result<Vec<f64>, TensorError> {
    check_query_key(q, k, scale)?;
    if v.is_empty() {
        tracing::debug!("attention rejected: empty value vector");
        return Err(TensorError::EmptyInput { op: "attention" });
    }
    if v.len() < q.len() {
        tracing::debug!("attention rejected: len(v)={} < len(q)={}", v.len(), q.len());
        return Err(TensorError::length_mismatch("attention", q.len(), v.len()));
    }
    tracing::trace!(q = q.len(), v = v.len(), scale, "attention");

    let weights = weights_unchecked(q, k, scale)?;

    let combined: f64 = weights.iter().zip(v).map(|(w, x)| w * x).sum();
    Ok(vec![combined; v.len()])
}

fn check_query_key(q: &[f64], k: &[f64], scale: f64) -> Result<(), TensorError> {
    if q.len() != k.len() {
        tracing::debug!("attention rejected: len(q)={} len(k)={}", q.len(), k.len());
        return Err(TensorError::length_mismatch("attention", q.len(), k.len()));
    }
    if scale == 0.0 || !scale.is_finite() {
        tracing::debug!("attention rejected: scale={scale}");
        return Err(TensorError::InvalidScale { scale });
    }
    Ok(())
}

fn weights_unchecked(q: &[f64], k: &[f64], scale: f64) -> Result<Vec<f64>, TensorError> {
    let scores: Vec<f64> = q
        .iter()
        .map(|&qi| k.iter().map(|&kj| qi * kj / scale).sum())
        .collect();
    softmax(&scores)
}
