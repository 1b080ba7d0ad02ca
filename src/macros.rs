macro_rules! assert_f64_eq {
    ($a:expr, $b:expr, $eps:expr) => {{
        let a = $a;
        let b = $b;
        let error = (a - b).abs();
        assert!(
            error <= $eps,
            "Assertion failed: |{} - {}| = {} > {}",
            a,
            b,
            error,
            $eps
        );
    }};
    ($a:expr, $b:expr, $eps:expr, $message:expr) => {{
        let a = $a;
        let b = $b;
        let error = (a - b).abs();
        assert!(error <= $eps, "{}: |{} - {}| = {} > {}", $message, a, b, error, $eps);
    }};
}

pub(crate) use assert_f64_eq;
