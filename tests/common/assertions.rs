//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a response is a 401 carrying the bearer challenge
#[macro_export]
macro_rules! assert_unauthorized {
    ($response:expr) => {
        assert_eq!(
            $response.status_code(),
            axum::http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            $response.header(axum::http::header::WWW_AUTHENTICATE),
            "Bearer"
        );
    };
}
