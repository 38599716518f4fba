// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Softmax activation operation.

use crate::{Tensor, TensorError};

/// Computes softmax over a vector: `output[i] = exp(x[i] - max) / sum(exp(x - max))`.
///
/// Uses the numerically stable variant that subtracts the maximum value
/// before exponentiation to prevent overflow. The maximum is seeded from
/// the first element, so all-negative inputs normalise correctly.
///
/// Infinite scores are handled without producing NaN: if any entry is
/// `+inf`, the weight is split evenly across the `+inf` entries and every
/// other entry gets 0; if every entry is `-inf`, the result is uniform.
///
/// # Errors
/// Returns [`TensorError::EmptyInput`] if `x` is empty.
/// Returns [`TensorError::NotANumber`] if any entry is NaN.
///
/// # Examples
/// ```
/// use attn_core::softmax;
/// let p = softmax(&[0.0, 0.0]).unwrap();
/// assert_eq!(p, vec![0.5, 0.5]);
/// ```
pub fn softmax(x: &[f64]) -> Result<Vec<f64>, TensorError> {
    if x.is_empty() {
        tracing::debug!("softmax rejected: empty input");
        return Err(TensorError::EmptyInput { op: "softmax" });
    }
    reject_nan(x)?;
    tracing::trace!(len = x.len(), "softmax");

    let mut output = vec![0.0; x.len()];
    softmax_row(x, &mut output);
    Ok(output)
}

/// Applies softmax independently to every row along the last dimension.
///
/// A rank-1 tensor is treated as a single row. The output has the same
/// shape as the input.
///
/// # Errors
/// Returns [`TensorError::EmptyInput`] if the tensor holds no elements.
/// Returns [`TensorError::NotANumber`] if any element is NaN.
pub fn softmax_tensor(input: &Tensor) -> Result<Tensor, TensorError> {
    let last_dim = input.shape().last_dim().unwrap_or(1);
    if input.is_empty() || last_dim == 0 {
        tracing::debug!("softmax rejected: empty tensor {}", input.shape());
        return Err(TensorError::EmptyInput { op: "softmax" });
    }
    reject_nan(input.as_slice())?;
    tracing::trace!(shape = %input.shape(), "softmax");

    let mut output = Tensor::zeros(input.shape().clone());
    for (src, dst) in input
        .as_slice()
        .chunks_exact(last_dim)
        .zip(output.as_mut_slice().chunks_exact_mut(last_dim))
    {
        softmax_row(src, dst);
    }
    Ok(output)
}

fn reject_nan(x: &[f64]) -> Result<(), TensorError> {
    match x.iter().position(|v| v.is_nan()) {
        Some(index) => {
            tracing::debug!("softmax rejected: NaN at index {index}");
            Err(TensorError::NotANumber { op: "softmax", index })
        }
        None => Ok(()),
    }
}

/// Normalises one non-empty, NaN-free row into `dst`.
fn softmax_row(src: &[f64], dst: &mut [f64]) {
    // Find max for numerical stability.
    let max_val = src[1..].iter().copied().fold(src[0], f64::max);

    // exp(inf - inf) is NaN, so infinite maxima are resolved directly.
    if max_val == f64::INFINITY {
        let count = src.iter().filter(|&&s| s == f64::INFINITY).count() as f64;
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = if s == f64::INFINITY { 1.0 / count } else { 0.0 };
        }
        return;
    }
    if max_val == f64::NEG_INFINITY {
        dst.fill(1.0 / src.len() as f64);
        return;
    }

    // Compute exp(x - max) and sum.
    let mut sum = 0.0;
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        let e = (s - max_val).exp();
        *d = e;
        sum += e;
    }

    // The max element contributes exp(0) = 1, so sum >= 1.
    for d in dst.iter_mut() {
        *d /= sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_softmax_uniform() {
        // Softmax of equal values → uniform distribution.
        let result = softmax(&[0.0, 0.0, 0.0]).unwrap();
        assert!(approx_eq(&result, &[1.0 / 3.0; 3], 1e-12));
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let result = softmax(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let sum: f64 = result.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_softmax_monotonic() {
        // Larger input → larger softmax output.
        let r = softmax(&[1.0, 2.0, 3.0]).unwrap();
        assert!(r[0] < r[1]);
        assert!(r[1] < r[2]);
    }

    #[test]
    fn test_softmax_all_negative() {
        // Against a max of 0 every term here underflows to zero.
        let r = softmax(&[-1000.0, -1001.0, -1002.0]).unwrap();
        let sum: f64 = r.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(r.iter().all(|x| x.is_finite()));
        assert!(r[0] > r[1] && r[1] > r[2]);
    }

    #[test]
    fn test_softmax_numerical_stability() {
        // Large values that would overflow without the max-subtraction trick.
        let r = softmax(&[1000.0, 1001.0, 1002.0]).unwrap();
        let sum: f64 = r.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(r.iter().all(|&x| x.is_finite()));
    }

    #[test]
    fn test_softmax_single_element() {
        assert_eq!(softmax(&[-42.0]).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_softmax_empty() {
        assert_eq!(
            softmax(&[]).unwrap_err(),
            TensorError::EmptyInput { op: "softmax" }
        );
    }

    #[test]
    fn test_softmax_positive_infinity_takes_all_weight() {
        let r = softmax(&[f64::INFINITY, 1.0]).unwrap();
        assert_eq!(r, vec![1.0, 0.0]);
    }

    #[test]
    fn test_softmax_positive_infinity_ties_split() {
        let r = softmax(&[f64::INFINITY, -3.0, f64::INFINITY]).unwrap();
        assert_eq!(r, vec![0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_softmax_all_negative_infinity_is_uniform() {
        let r = softmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY]).unwrap();
        assert_eq!(r, vec![0.5, 0.5]);
    }

    #[test]
    fn test_softmax_negative_infinity_gets_zero() {
        let r = softmax(&[f64::NEG_INFINITY, 0.0]).unwrap();
        assert_eq!(r, vec![0.0, 1.0]);
    }

    #[test]
    fn test_softmax_nan_rejected() {
        assert_eq!(
            softmax(&[1.0, f64::NAN]).unwrap_err(),
            TensorError::NotANumber {
                op: "softmax",
                index: 1
            }
        );
    }

    #[test]
    fn test_softmax_tensor_infinite_rows() {
        let input = Tensor::from_slice(
            Shape::matrix(2, 2),
            &[f64::INFINITY, 0.0, f64::NEG_INFINITY, f64::NEG_INFINITY],
        )
        .unwrap();
        let output = softmax_tensor(&input).unwrap();
        assert_eq!(output.as_slice(), &[1.0, 0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_softmax_tensor_nan_rejected() {
        let input = Tensor::from(vec![0.0, 0.0, f64::NAN]);
        assert!(matches!(
            softmax_tensor(&input),
            Err(TensorError::NotANumber { index: 2, .. })
        ));
    }

    #[test]
    fn test_softmax_tensor_2d() {
        // Softmax applied row-wise on a [2, 3] tensor.
        let input =
            Tensor::from_slice(Shape::matrix(2, 3), &[1.0, 2.0, 3.0, 1.0, 1.0, 1.0]).unwrap();

        let output = softmax_tensor(&input).unwrap();

        assert_eq!(output.shape(), &Shape::matrix(2, 3));
        let r = output.as_slice();
        let sum0: f64 = r[0..3].iter().sum();
        assert!((sum0 - 1.0).abs() < 1e-9);
        assert!(approx_eq(&r[3..6], &[1.0 / 3.0; 3], 1e-12));
    }

    #[test]
    fn test_softmax_tensor_matches_flat() {
        let x = [0.5, -1.5, 2.0, 0.0];
        let t = softmax_tensor(&Tensor::from(x.to_vec())).unwrap();
        assert_eq!(t.as_slice(), softmax(&x).unwrap().as_slice());
    }

    #[test]
    fn test_softmax_tensor_empty() {
        assert!(softmax_tensor(&Tensor::zeros(Shape::matrix(3, 0))).is_err());
        assert!(softmax_tensor(&Tensor::from(Vec::new())).is_err());
    }
}
