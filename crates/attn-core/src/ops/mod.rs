// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor arithmetic operations.
//!
//! Every operation validates its operands before touching any data and
//! returns a freshly allocated result; inputs are only ever borrowed.

mod attention_op;
mod matmul_op;
mod softmax_op;

pub use attention_op::{attention, attention_weights, default_scale};
pub use matmul_op::{matmul, multiply};
pub use softmax_op::{softmax, softmax_tensor};
