// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # attn
//!
//! Command-line driver for the attn-core kernels.
//!
//! ## Usage
//! ```bash
//! # Scaled attention on the built-in demonstration vectors
//! attn attention
//!
//! # Custom vectors, explicit scale, weights shown
//! attn attention --query 1,2,3 --key 4,5,6 --value 7,8,9 --scale 1.5 --show-weights
//!
//! # Inputs from a TOML file, JSON output
//! attn --config attn.toml --json attention
//!
//! # The standalone kernels
//! attn softmax --input 0,0,0
//! attn multiply --lhs 1,0,0,1 --rhs 1,0,0,1
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::VectorArg;

#[derive(Parser)]
#[command(
    name = "attn",
    about = "Scaled attention, softmax, and matrix multiply over f64 vectors",
    version,
    author
)]
struct Cli {
    /// Path to a TOML file with attention inputs (flags override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate scaled attention over query, key, and value vectors.
    Attention {
        /// Query vector, comma-separated.
        #[arg(short, long, allow_hyphen_values = true)]
        query: Option<VectorArg>,

        /// Key vector, comma-separated (same length as the query).
        #[arg(short, long, allow_hyphen_values = true)]
        key: Option<VectorArg>,

        /// Value vector, comma-separated.
        #[arg(long, allow_hyphen_values = true)]
        value: Option<VectorArg>,

        /// Scale factor (defaults to sqrt of the key length).
        #[arg(short, long, allow_hyphen_values = true)]
        scale: Option<f64>,

        /// Also print the softmax attention weights.
        #[arg(long)]
        show_weights: bool,
    },

    /// Normalise a score vector into a probability distribution.
    Softmax {
        /// Input vector, comma-separated.
        #[arg(short, long, allow_hyphen_values = true)]
        input: VectorArg,
    },

    /// Multiply a flattened matrix by a flattened square matrix.
    Multiply {
        /// Left operand, row-major, comma-separated.
        #[arg(long, allow_hyphen_values = true)]
        lhs: VectorArg,

        /// Square right operand, row-major, comma-separated.
        #[arg(long, allow_hyphen_values = true)]
        rhs: VectorArg,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Attention {
            query,
            key,
            value,
            scale,
            show_weights,
        } => {
            let overrides = commands::attention::Overrides {
                query,
                key,
                value,
                scale,
            };
            commands::attention::execute(cli.config, overrides, show_weights, cli.json)
        }
        Commands::Softmax { input } => commands::softmax::execute(input, cli.json),
        Commands::Multiply { lhs, rhs } => commands::multiply::execute(lhs, rhs, cli.json),
    }
}
