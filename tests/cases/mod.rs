/// Absolute tolerance for comparing computed values.
pub const TOLERANCE: f64 = 1e-8;

pub fn assert_close(input: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{} should be {} but was {}",
        input,
        expected,
        actual
    );
}

/// Defines a `#[test]` computing `input`, expecting either a value (within
/// [`TOLERANCE`]) or an error matching a pattern.
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let input = $input;
            let actual = tally::compute(input)
                .unwrap_or_else(|e| panic!("Computing failed: {}\n{}", input, e));
            $crate::cases::assert_close(input, actual, $value);
        }
    };
    ($name:ident, input: $input:expr, error: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let input = $input;
            let result = tally::compute(input);
            assert!(
                matches!(result, Err($pattern)),
                "{} produced {:?}",
                input,
                result
            );
        }
    };
}
