// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `attn multiply` command: flattened row-major matrix product.

use crate::commands::{emit, VectorArg};

pub fn execute(lhs: VectorArg, rhs: VectorArg, json: bool) -> anyhow::Result<()> {
    tracing::debug!("multiply len(lhs)={} len(rhs)={}", lhs.0.len(), rhs.0.len());
    let result = attn_core::multiply(&lhs.0, &rhs.0)
        .map_err(|e| anyhow::anyhow!("multiply failed: {e}"))?;
    emit(json, "Multiply result", &result, serde_json::Value::Null)
}
