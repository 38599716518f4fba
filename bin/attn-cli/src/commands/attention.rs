// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `attn attention` command: evaluate scaled attention on three vectors.

use crate::commands::{emit, VectorArg};
use crate::config::AttentionConfig;
use std::path::PathBuf;

/// Flag overrides applied on top of the config file (or the defaults).
#[derive(Debug, Default)]
pub struct Overrides {
    pub query: Option<VectorArg>,
    pub key: Option<VectorArg>,
    pub value: Option<VectorArg>,
    pub scale: Option<f64>,
}

pub fn execute(
    config_path: Option<PathBuf>,
    overrides: Overrides,
    show_weights: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = resolve_config(config_path, overrides)?;
    let scale = config.resolve_scale();
    tracing::info!(
        "attention over len(q)={} len(k)={} len(v)={} scale={scale}",
        config.query.len(),
        config.key.len(),
        config.value.len(),
    );

    let result = attn_core::attention(&config.query, &config.key, &config.value, scale)
        .map_err(|e| anyhow::anyhow!("attention failed: {e}"))?;

    let mut extra = serde_json::json!({ "scale": scale });
    if show_weights {
        let weights = attn_core::attention_weights(&config.query, &config.key, scale)?;
        if !json {
            println!("Attention weights: {weights:?}");
        }
        extra["weights"] = serde_json::json!(weights);
    }
    emit(json, "Attention result", &result, extra)
}

/// Loads the config file if given, then applies command-line overrides.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    overrides: Overrides,
) -> anyhow::Result<AttentionConfig> {
    let mut config = match config_path {
        Some(path) => AttentionConfig::from_file(&path)?,
        None => AttentionConfig::default(),
    };
    if let Some(VectorArg(q)) = overrides.query {
        config.query = q;
    }
    if let Some(VectorArg(k)) = overrides.key {
        config.key = k;
    }
    if let Some(VectorArg(v)) = overrides.value {
        config.value = v;
    }
    if overrides.scale.is_some() {
        config.scale = overrides.scale;
    }
    Ok(config)
}
