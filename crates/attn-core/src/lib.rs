// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # attn-core
//!
//! Small numeric kernels for scaled attention over one-dimensional vectors.
//!
//! This crate provides:
//! - [`Tensor`] — an owned, shape-tagged `f64` buffer.
//! - [`Shape`] — explicit dimension descriptors used for structural checks.
//! - [`multiply`] / [`matmul`] — dense row-major matrix multiplication.
//! - [`softmax`] / [`softmax_tensor`] — numerically stable normalisation.
//! - [`attention`] / [`attention_weights`] — the scaled attention composer.
//!
//! # Design Goals
//! - Pure functions: no shared state, no I/O, results never alias inputs.
//! - Every precondition is checked up front; no partial results.
//! - Clean error types via `thiserror`.

mod error;
mod ops;
mod shape;
mod tensor;

pub use error::TensorError;
pub use ops::{
    attention, attention_weights, default_scale, matmul, multiply, softmax, softmax_tensor,
};
pub use shape::Shape;
pub use tensor::Tensor;
