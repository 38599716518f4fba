// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI helpers.

pub mod attention;
pub mod multiply;
pub mod softmax;

use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Initialises the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
/// Logs go to stderr so results on stdout stay machine-readable.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A comma-separated list of `f64` values, e.g. `1,2.5,-3`.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorArg(pub Vec<f64>);

impl FromStr for VectorArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self(Vec::new()));
        }
        s.split(',')
            .map(|tok| {
                let tok = tok.trim();
                tok.parse::<f64>()
                    .map_err(|e| format!("invalid number '{tok}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Prints a labelled result vector; see [`render`].
pub fn emit(
    json: bool,
    label: &str,
    result: &[f64],
    extra: serde_json::Value,
) -> anyhow::Result<()> {
    println!("{}", render(json, label, result, extra)?);
    Ok(())
}

/// Formats a result vector as `label: [..]`, or as a JSON object holding
/// `result` plus the fields of `extra` (an object, or `Null` for none).
///
/// JSON has no NaN or infinity, so such entries are written as `null` and
/// a warning is logged.
pub fn render(
    json: bool,
    label: &str,
    result: &[f64],
    extra: serde_json::Value,
) -> anyhow::Result<String> {
    if !json {
        return Ok(format!("{label}: {result:?}"));
    }
    let non_finite = result.iter().filter(|x| !x.is_finite()).count();
    if non_finite > 0 {
        tracing::warn!("{label}: {non_finite} non-finite value(s) written as null in JSON output");
    }
    let mut payload = extra;
    payload["result"] = serde_json::json!(result);
    Ok(serde_json::to_string_pretty(&payload)?)
}
