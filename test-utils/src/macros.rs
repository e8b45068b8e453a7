//! Test macros for common testing patterns

/// Macro to assert an error contains a specific substring
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $expected:expr) => {{
        match $result {
            Ok(_) => panic!("Expected error containing '{}', but got Ok", $expected),
            Err(e) => {
                let error_str = format!("{}", e);
                if !error_str.contains($expected) {
                    panic!("Expected error to contain '{}', but got '{}'", $expected, error_str);
                }
            }
        }
    }};
}

/// Macro to assert a result is an error matching a pattern
#[macro_export]
macro_rules! assert_draft_err {
    ($result:expr, $pattern:pat $(if $guard:expr)? $(,)?) => {{
        match $result {
            Err($pattern) $(if $guard)? => {}
            Err(other) => panic!("Unexpected error: {:?}", other),
            Ok(_) => panic!("Expected error matching {}, but got Ok", stringify!($pattern)),
        }
    }};
}
