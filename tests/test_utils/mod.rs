#![allow(dead_code)]

use tabfn::{StorageKind, TabulatedFunction};

// Helper function to assert floating point equality with tolerance
pub fn assert_float_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() < tolerance,
        "Expected {} to be approximately equal to {} (tolerance: {})",
        a,
        b,
        tolerance
    );
}

/// Equal values, or both NaN.
pub fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub const KINDS: [StorageKind; 2] = [StorageKind::Array, StorageKind::LinkedList];

/// One zero-filled function per storage kind.
pub fn tabulate_each(
    left_x: f64,
    right_x: f64,
    count: usize,
) -> Vec<(StorageKind, Box<dyn TabulatedFunction>)> {
    KINDS
        .iter()
        .map(|&kind| {
            let function = kind
                .tabulate(left_x, right_x, count)
                .unwrap_or_else(|e| panic!("failed to build {} function: {}", kind, e));
            (kind, function)
        })
        .collect()
}

/// One function per storage kind built from `values`.
pub fn from_values_each(
    left_x: f64,
    right_x: f64,
    values: &[f64],
) -> Vec<(StorageKind, Box<dyn TabulatedFunction>)> {
    KINDS
        .iter()
        .map(|&kind| {
            let function = kind
                .from_values(left_x, right_x, values)
                .unwrap_or_else(|e| panic!("failed to build {} function: {}", kind, e));
            (kind, function)
        })
        .collect()
}

/// Asserts strictly ascending x across the whole function.
pub fn assert_ascending(function: &dyn TabulatedFunction) {
    let points = function.points();
    for pair in points.windows(2) {
        assert!(
            pair[0].x() < pair[1].x(),
            "points not ascending: {} then {}",
            pair[0],
            pair[1]
        );
    }
}
