//! Steadybench Example Benchmarks
//!
//! This example demonstrates steadybench and serves as a template for
//! creating your own benchmark suite.
//!
//! Run with:
//!   cargo run --release --example benchmarks                      # Run all benchmarks
//!   cargo run --release --example benchmarks -- list              # List benchmarks
//!   cargo run --release --example benchmarks -- 'string_.*'       # Run matching benchmarks
//!   cargo run --release --example benchmarks -- -e json -o report.json
//!   cargo run --release --example benchmarks -- --help            # Show all options

use std::hint::black_box;
use std::sync::OnceLock;
use steadybench::bench;

// ============================================================================
// Basic Benchmarks
// ============================================================================

/// Simple arithmetic benchmark
#[bench]
fn addition() {
    let x = black_box(42u64);
    let y = black_box(17u64);
    black_box(x + y);
}

/// Vector sum benchmark; the data is a fixture, built outside the timed body
#[bench]
fn vector_sum() {
    static DATA: OnceLock<Vec<i64>> = OnceLock::new();
    let data = DATA.get_or_init(|| (0..1000).collect());

    black_box(data.iter().sum::<i64>());
}

// ============================================================================
// HashMap Benchmarks
// ============================================================================

/// HashMap insertion benchmark
#[bench]
fn hashmap_insert() {
    use std::collections::HashMap;

    let mut map = HashMap::new();
    for i in 0..100 {
        map.insert(i, i * 2);
    }
    black_box(map);
}

/// HashMap lookup benchmark
#[bench]
fn hashmap_lookup() {
    use std::collections::HashMap;

    static MAP: OnceLock<HashMap<i32, i32>> = OnceLock::new();
    let map = MAP.get_or_init(|| (0..1000).map(|i| (i, i * 2)).collect());

    let mut sum = 0;
    for i in 0..100 {
        if let Some(v) = map.get(&i) {
            sum += v;
        }
    }
    black_box(sum);
}

// ============================================================================
// String Benchmarks
// ============================================================================

/// String concatenation benchmark
#[bench]
fn string_concat() {
    let mut s = String::new();
    for i in 0..100 {
        s.push_str(&format!("{}", i));
    }
    black_box(s);
}

/// String parsing benchmark
#[bench]
fn string_parse() {
    static NUMBERS: OnceLock<Vec<String>> = OnceLock::new();
    let numbers = NUMBERS.get_or_init(|| (0..100).map(|i| i.to_string()).collect());

    let sum: i64 = numbers.iter().filter_map(|s| s.parse::<i64>().ok()).sum();
    black_box(sum);
}

// ============================================================================
// Computation Benchmarks
// ============================================================================

/// Fibonacci (naive recursive) - expensive
#[bench(name = "fibonacci/naive")]
fn fibonacci_naive() {
    fn fib(n: u32) -> u64 {
        if n <= 1 {
            n as u64
        } else {
            fib(n - 1) + fib(n - 2)
        }
    }

    black_box(fib(black_box(20)));
}

/// Fibonacci (iterative) - fast
#[bench(name = "fibonacci/iterative")]
fn fibonacci_iter() {
    fn fib(n: u32) -> u64 {
        let mut a = 0u64;
        let mut b = 1u64;
        for _ in 0..n {
            let tmp = a;
            a = b;
            b += tmp;
        }
        a
    }

    black_box(fib(black_box(20)));
}

// ============================================================================
// Sorting Benchmarks
// ============================================================================

/// Sort a small pseudo-random array, regenerated each call
#[bench]
fn sort_small() {
    // Cheap LCG keeps the input deterministic without an RNG dependency.
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut data: Vec<u64> = (0..100)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            state >> 33
        })
        .collect();
    data.sort_unstable();
    black_box(data);
}

// ============================================================================
// Main Entry Point - Uses Steadybench CLI
// ============================================================================

fn main() {
    // All benchmarks defined above are automatically discovered via inventory
    if let Err(e) = steadybench::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
