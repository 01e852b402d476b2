//! Testing helpers.

use assert_float_eq::*;

/// Asserts that two prices (or derived metrics) agree within a relative `epsilon`.
pub fn assert_price_relative(expected: f64, actual: f64, epsilon: f64) {
    if actual != expected {
        assert_float_relative_eq!(expected, actual, epsilon);
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        assert_price_relative(expected, actual[index], epsilon);
    }
}

/// Asserts that two name sequences are equal, reporting the first divergent index.
pub fn assert_names_eq<A: AsRef<str>, B: AsRef<str>>(expected: &[A], actual: &[B]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, (expected, actual)) in expected.iter().zip(actual).enumerate() {
        assert_eq!(
            expected.as_ref(),
            actual.as_ref(),
            "names differ at index {index}"
        );
    }
}
