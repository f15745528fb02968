//! fp8gold CLI - Decode FP8 bit strings and emit MAC golden vectors.

use clap::{Parser, Subcommand};

use fp8_golden::{matmul, mul_lanes_bf16, outer_product, Fp8Format};

mod common;
mod render;

#[derive(Parser)]
#[command(name = "fp8gold")]
#[command(about = "Golden-vector generator for FP8/BF16 MAC validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode 8-bit binary literals under a named format
    Decode {
        /// Binary literals, 8 digits each (optional 0b prefix, underscores allowed)
        bits: Vec<String>,

        /// Format name: E4M3 or E5M2
        #[arg(short, long, default_value = "E4M3")]
        format: String,
    },

    /// Outer product with accumulate: (fp8 * fp8) + acc, all in float32
    Outer {
        /// JSON list of 16 floats for vector a
        #[arg(long)]
        a: Option<String>,

        /// JSON list of 16 floats for vector b
        #[arg(long)]
        b: Option<String>,

        /// Scalar accumulated after each multiply
        #[arg(long, default_value_t = 1.5)]
        acc: f64,

        /// Also print the int32 grid comma-separated for easy copy
        #[arg(long)]
        comma_int32: bool,
    },

    /// Matrix multiply with accumulate: (A @ B) + acc, all in float32
    Matmul {
        /// JSON 2D list for matrix A (MxK)
        #[arg(long)]
        a: Option<String>,

        /// JSON 2D list for matrix B (KxN)
        #[arg(long)]
        b: Option<String>,

        /// Scalar accumulated after the dot product
        #[arg(long, default_value_t = 1.5)]
        acc: f64,

        /// Size for the example square matrices when A/B are omitted
        #[arg(long, default_value_t = 16)]
        example_size: usize,

        /// Also print the int32 grid comma-separated for easy copy
        #[arg(long)]
        comma_int32: bool,
    },

    /// 8-lane FP8 widening multiply emitting BF16 goldens
    Lanes {
        /// Format name: E4M3 or E5M2
        #[arg(short, long, default_value = "E4M3")]
        format: String,

        /// JSON list of 8 floats for vector a
        #[arg(long)]
        a: Option<String>,

        /// JSON list of 8 floats for vector b
        #[arg(long)]
        b: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { bits, format } => {
            let format = Fp8Format::from_name(&format)?;
            let literals = if bits.is_empty() {
                common::demo_literals()
            } else {
                bits
            };
            render::print_decode_table(format, &literals)?;
        }
        Commands::Outer {
            a,
            b,
            acc,
            comma_int32,
        } => {
            let a = common::vector_or(a.as_deref(), "--a", common::outer_ramp_a)?;
            let b = common::vector_or(b.as_deref(), "--b", common::outer_ramp_b)?;
            let golden = outer_product(&a, &b, acc)?;
            render::print_outer(&golden, acc, comma_int32);
        }
        Commands::Matmul {
            a,
            b,
            acc,
            example_size,
            comma_int32,
        } => {
            let a = common::matrix_or(a.as_deref(), "--a", || common::example_a(example_size))?;
            let b = common::matrix_or(b.as_deref(), "--b", || common::example_b(example_size))?;
            let golden = matmul(&a, &b, acc)?;
            render::print_matmul(&golden, acc, comma_int32);
        }
        Commands::Lanes { format, a, b } => {
            let format = Fp8Format::from_name(&format)?;
            let a = common::vector_or(a.as_deref(), "--a", common::lane_demo_a)?;
            let b = common::vector_or(b.as_deref(), "--b", common::lane_demo_b)?;
            let golden = mul_lanes_bf16(format, &a, &b)?;
            render::print_lanes(&golden);
        }
    }

    Ok(())
}
