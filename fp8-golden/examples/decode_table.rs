//! Bit-string decode demo.
//!
//! Decodes a fixed set of 8-bit literals under E4M3 and prints the
//! diagnostic table: index, bits, unsigned code, class, value.

use fp8_golden::{decode_from_bits, Fp8Format};

fn main() {
    let bins = [
        "00000000", "00000001", "00000100", "01111110", "01111111",
        "10000000", "11110000", "11110111", "11111000", "11111111",
        "00101010", "10101010", "01010101", "00001111", "10001111",
    ];
    let format = Fp8Format::E4M3;

    let codes: Vec<u8> = bins
        .iter()
        .map(|b| fp8_golden::parse_bit_literal(b).unwrap())
        .collect();
    println!("Uint8 representation: {:?}", codes);
    println!("Format: {}", format);
    println!("{:>2}  {:8}  {:>3}  {:10}  value", "i", "bits", "u8", "class");

    for (i, bits) in bins.iter().enumerate() {
        let (category, value) = decode_from_bits(bits, format).unwrap();
        let value_str = if value.is_nan() {
            "nan".to_string()
        } else if value.is_infinite() {
            if value < 0.0 { "-inf".to_string() } else { "inf".to_string() }
        } else {
            format!("{}", value)
        };
        println!(
            "{:2}  {:8}  {:3}  {:10}  {}",
            i,
            bits,
            codes[i],
            category.to_string(),
            value_str
        );
    }
}
