// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: simplified self-attention on three fixed vectors.
//!
//! ```bash
//! cargo run -p attn-core --example demo_attention
//! ```

use attn_core::{attention, default_scale};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let q = [1.0, 2.0, 3.0];
    let k = [4.0, 5.0, 6.0];
    let v = [7.0, 8.0, 9.0];

    let scale = default_scale(k.len());
    let result = attention(&q, &k, &v, scale)?;
    println!("Attention result: {result:?}");

    Ok(())
}
