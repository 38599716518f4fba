// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `attn softmax` command.

use crate::commands::{emit, VectorArg};

pub fn execute(input: VectorArg, json: bool) -> anyhow::Result<()> {
    let result =
        attn_core::softmax(&input.0).map_err(|e| anyhow::anyhow!("softmax failed: {e}"))?;
    emit(json, "Softmax result", &result, serde_json::Value::Null)
}
