// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Attention inputs loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! query = [1.0, 2.0, 3.0]
//! key = [4.0, 5.0, 6.0]
//! value = [7.0, 8.0, 9.0]
//! scale = 1.7320508075688772   # optional, defaults to sqrt(len(key))
//! ```

use anyhow::Context;
use std::path::Path;

/// Inputs for a single attention evaluation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttentionConfig {
    /// Query vector.
    pub query: Vec<f64>,
    /// Key vector; must be as long as the query.
    pub key: Vec<f64>,
    /// Value vector; sets the output length.
    pub value: Vec<f64>,
    /// Scale factor. `None` means `sqrt(key.len())`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl AttentionConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("TOML parse error")
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("TOML serialise error")
    }

    /// Resolves the scale factor, falling back to `sqrt(len(key))`.
    pub fn resolve_scale(&self) -> f64 {
        self.scale
            .unwrap_or_else(|| attn_core::default_scale(self.key.len()))
    }
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            query: vec![1.0, 2.0, 3.0],
            key: vec![4.0, 5.0, 6.0],
            value: vec![7.0, 8.0, 9.0],
            scale: None,
        }
    }
}
