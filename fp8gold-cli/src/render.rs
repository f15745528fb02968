//! Table rendering for codec and MAC output.
//!
//! Layouts mirror the golden-vector reports hardware tests are written
//! against; keep column order stable.

use anyhow::Result;
use half::bf16;

use fp8_golden::{parse_bit_literal, Fp8Format, LaneProducts, MatMul, OuterProduct};

/// Render an f64 the way the diagnostic tables expect specials.
fn fmt_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{}", value)
    }
}

/// Decode literals under `format` and print the diagnostic table.
pub fn print_decode_table(format: Fp8Format, literals: &[String]) -> Result<()> {
    // validate everything before printing any row
    let mut rows = Vec::with_capacity(literals.len());
    for literal in literals {
        let code = parse_bit_literal(literal)?;
        let (category, value) = format.decode(code);
        rows.push((literal, code, category, value));
    }

    println!(
        "Uint8 representation: {:?}",
        rows.iter().map(|r| r.1).collect::<Vec<_>>()
    );
    println!("Format: {}", format);
    println!("{:>2}  {:8}  {:>3}  {:10}  value", "i", "bits", "u8", "class");
    for (i, (literal, code, category, value)) in rows.iter().enumerate() {
        println!(
            "{:2}  {:8}  {:3}  {:10}  {}",
            i,
            literal,
            code,
            category.to_string(),
            fmt_value(*value)
        );
    }
    Ok(())
}

/// Print the outer-product report: encoded inputs, quantized lattice,
/// float32 grid, int32 bit-pattern grid.
pub fn print_outer(golden: &OuterProduct, acc: f64, comma_int32: bool) {
    println!("=== Outer Product: result = (fp8 * fp8) + {} (all in float32) ===", acc);
    println!("=== Inputs encoded to FP8 E4M3 (as signed int8 and 8-bit binary) ===");
    println!("a_bits (int8): {:?}", golden.a_codes_i8());
    println!("a_bits (bin) : {:?}", golden.a_codes_binary());
    println!("b_bits (int8): {:?}", golden.b_codes_i8());
    println!("b_bits (bin) : {:?}", golden.b_codes_binary());

    println!("\n=== Quantized inputs (decoded FP8 -> float32) ===");
    println!("a_quant: {:?}", golden.a_quant);
    println!("b_quant: {:?}", golden.b_quant);

    println!("\n=== C = a x b, then +acc (float32) ===");
    print_f32_grid(&golden.cells);

    println!("\n=== C as int32 raw bit patterns (two's complement) ===");
    print_i32_grid(&golden.cells_bits);

    if comma_int32 {
        println!("\n=== C as int32 (comma-separated for easy copy) ===");
        print_comma_rows(&golden.cells_bits);
    }
}

/// Print the matmul report, same sections as the outer product.
pub fn print_matmul(golden: &MatMul, acc: f64, comma_int32: bool) {
    println!("=== MatMul: result = (A @ B) + {} (all in float32) ===", acc);
    println!("=== A encoded to FP8 E4M3 (int8) ===");
    for row in golden.a_codes_i8() {
        println!("   {:?}", row);
    }
    println!("=== B encoded to FP8 E4M3 (int8) ===");
    for row in golden.b_codes_i8() {
        println!("   {:?}", row);
    }

    println!("\n=== A_quant (decoded FP8 -> float32) ===");
    for row in &golden.a_quant {
        println!("   {:?}", row);
    }
    println!("=== B_quant (decoded FP8 -> float32) ===");
    for row in &golden.b_quant {
        println!("   {:?}", row);
    }

    println!("\n=== C = A @ B + acc (float32) ===");
    print_f32_grid(&golden.cells);

    println!("\n=== C as int32 raw bit patterns (two's complement) ===");
    print_i32_grid(&golden.cells_bits);

    if comma_int32 {
        println!("\n=== C as int32 (comma-separated for easy copy) ===");
        print_comma_rows(&golden.cells_bits);
    }
}

/// Print the lane-product report with BF16 codes in hex and binary.
pub fn print_lanes(golden: &LaneProducts) {
    println!("=== FP8 {} -> multiply -> BF16 goldens ===", golden.format);
    println!(
        "A fp8 bytes: {:?}",
        golden
            .a_codes
            .iter()
            .map(|c| format!("0x{:02x}", c))
            .collect::<Vec<_>>()
    );
    println!(
        "B fp8 bytes: {:?}",
        golden
            .b_codes
            .iter()
            .map(|c| format!("0x{:02x}", c))
            .collect::<Vec<_>>()
    );

    for i in 0..golden.products.len() {
        let code = golden.bf16_codes[i];
        println!(
            "lane{}: A={:+}  B={:+}  A*B={:+}  bf16=0x{:04x} ({:016b}) ~{}",
            i,
            golden.a_quant[i],
            golden.b_quant[i],
            golden.products[i],
            code,
            code,
            bf16::from_bits(code)
        );
    }
}

fn print_f32_grid(grid: &[Vec<f32>]) {
    for row in grid {
        let cells: Vec<String> = row.iter().map(|x| format!("{:>10}", x)).collect();
        println!("   {}", cells.join(" "));
    }
}

fn print_i32_grid(grid: &[Vec<i32>]) {
    for row in grid {
        let cells: Vec<String> = row.iter().map(|x| format!("{:>11}", x)).collect();
        println!("   {}", cells.join(" "));
    }
}

fn print_comma_rows(grid: &[Vec<i32>]) {
    for row in grid {
        let cells: Vec<String> = row.iter().map(i32::to_string).collect();
        println!("   {},", cells.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_value_specials() {
        assert_eq!(fmt_value(f64::NAN), "nan");
        assert_eq!(fmt_value(f64::INFINITY), "inf");
        assert_eq!(fmt_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(fmt_value(448.0), "448");
        assert_eq!(fmt_value(0.1015625), "0.1015625");
    }
}
