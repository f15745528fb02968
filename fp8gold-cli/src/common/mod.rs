//! Input parsing helpers and the built-in demo vectors.

use anyhow::{Context, Result};

/// Parse a JSON array of doubles, naming the flag on failure.
pub fn parse_vector(json: &str, flag: &str) -> Result<Vec<f64>> {
    serde_json::from_str(json)
        .with_context(|| format!("{} must be a JSON list of numbers", flag))
}

/// Parse a JSON 2D array of doubles, naming the flag on failure.
pub fn parse_matrix(json: &str, flag: &str) -> Result<Vec<Vec<f64>>> {
    serde_json::from_str(json)
        .with_context(|| format!("{} must be a JSON 2D list of numbers", flag))
}

/// Parse the flag if given, otherwise build the default vector.
pub fn vector_or(
    json: Option<&str>,
    flag: &str,
    default: impl FnOnce() -> Vec<f64>,
) -> Result<Vec<f64>> {
    match json {
        Some(s) => parse_vector(s, flag),
        None => Ok(default()),
    }
}

/// Parse the flag if given, otherwise build the default matrix.
pub fn matrix_or(
    json: Option<&str>,
    flag: &str,
    default: impl FnOnce() -> Vec<Vec<f64>>,
) -> Result<Vec<Vec<f64>>> {
    match json {
        Some(s) => parse_matrix(s, flag),
        None => Ok(default()),
    }
}

/// Default 16-lane ramp for the outer product's `a`: -1 .. 1
pub fn outer_ramp_a() -> Vec<f64> {
    (0..16).map(|i| -1.0 + 2.0 * i as f64 / 15.0).collect()
}

/// Default 16-lane ramp for the outer product's `b`: 1 .. -1
pub fn outer_ramp_b() -> Vec<f64> {
    (0..16).map(|i| 1.0 - 2.0 * i as f64 / 15.0).collect()
}

/// Example NxN matrix A: row-major ramp over [-1, 1]
pub fn example_a(n: usize) -> Vec<Vec<f64>> {
    let den = (n * n - 1) as f64;
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| -1.0 + 2.0 * (i * n + j) as f64 / den)
                .collect()
        })
        .collect()
}

/// Example NxN matrix B: column-major ramp over [1, -1]
pub fn example_b(n: usize) -> Vec<Vec<f64>> {
    let den = (n * n - 1) as f64;
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| 1.0 - 2.0 * (j * n + i) as f64 / den)
                .collect()
        })
        .collect()
}

/// Default 8-lane vectors for the widening-multiply goldens
pub fn lane_demo_a() -> Vec<f64> {
    vec![0.0, 1.0, -1.0, 0.5, -0.5, 1.5, -2.0, 3.0]
}

pub fn lane_demo_b() -> Vec<f64> {
    vec![0.0, 0.5, -0.5, 2.0, 3.0, -1.5, 1.25, -4.0]
}

/// The demo literal set for `decode` with no arguments
pub fn demo_literals() -> Vec<String> {
    [
        "00000000", "00000001", "00000100", "01111110", "01111111",
        "10000000", "11110000", "11110111", "11111000", "11111111",
        "00101010", "10101010", "01010101", "00001111", "10001111",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        let v = parse_vector("[0, 1.5, -2]", "--a").unwrap();
        assert_eq!(v, vec![0.0, 1.5, -2.0]);
    }

    #[test]
    fn test_parse_vector_rejects_garbage() {
        let err = parse_vector("[0, oops]", "--a").unwrap_err();
        assert!(err.to_string().contains("--a"));
    }

    #[test]
    fn test_parse_matrix() {
        let m = parse_matrix("[[1, 2], [3, 4]]", "--b").unwrap();
        assert_eq!(m, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_parse_matrix_rejects_flat_list() {
        assert!(parse_matrix("[1, 2, 3]", "--b").is_err());
    }

    #[test]
    fn test_ramps_have_expected_endpoints() {
        let a = outer_ramp_a();
        let b = outer_ramp_b();
        assert_eq!(a.len(), 16);
        assert_eq!(a[0], -1.0);
        assert_eq!(a[15], 1.0);
        assert_eq!(b[0], 1.0);
        assert_eq!(b[15], -1.0);
    }

    #[test]
    fn test_example_matrices_are_square() {
        let a = example_a(4);
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|row| row.len() == 4));
        assert_eq!(a[0][0], -1.0);
        assert_eq!(a[3][3], 1.0);
    }
}
