//! Outer-product golden vector demo.
//!
//! Runs the 16-lane ramp vectors through the reference outer product and
//! prints the quantized inputs plus both result grids.

use fp8_golden::outer_product;

fn main() {
    let a: Vec<f64> = (0..16).map(|i| -1.0 + 2.0 * i as f64 / 15.0).collect();
    let b: Vec<f64> = (0..16).map(|i| 1.0 - 2.0 * i as f64 / 15.0).collect();

    let golden = outer_product(&a, &b, 1.5).unwrap();

    println!("=== Inputs encoded to FP8 E4M3 ===");
    println!("a_bits (int8): {:?}", golden.a_codes_i8());
    println!("a_bits (bin) : {:?}", golden.a_codes_binary());
    println!("b_bits (int8): {:?}", golden.b_codes_i8());
    println!("b_bits (bin) : {:?}", golden.b_codes_binary());

    println!("\n=== Quantized inputs (decoded FP8 -> float32) ===");
    println!("a_quant: {:?}", golden.a_quant);
    println!("b_quant: {:?}", golden.b_quant);

    println!("\n=== C = a ⊗ b + 1.5 (float32) ===");
    for row in &golden.cells {
        let cells: Vec<String> = row.iter().map(|x| format!("{:>10}", x)).collect();
        println!("   {}", cells.join(" "));
    }

    println!("\n=== C as int32 raw bit patterns ===");
    for row in &golden.cells_bits {
        let cells: Vec<String> = row.iter().map(|x| format!("{:>11}", x)).collect();
        println!("   {}", cells.join(" "));
    }
}
