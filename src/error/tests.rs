use super::*;
use crate::field::Backend;

#[test]
fn test_validation_functions() {
    // Range validation
    assert!(validate::in_range(0).is_ok());
    assert!(validate::in_range(255).is_ok());
    let err = validate::in_range(256).unwrap_err();

    match err {
        Error::Range { value } => {
            assert_eq!(value, 256);
        }
        _ => panic!("Expected Range error"),
    }

    // Zero-divisor validation
    assert!(validate::nonzero(1, "div").is_ok());
    let err = validate::nonzero(0, "div").unwrap_err();

    match err {
        Error::DivisionByZero { operation } => {
            assert_eq!(operation, "div");
        }
        _ => panic!("Expected DivisionByZero error"),
    }

    // Backend validation
    assert!(validate::same_backend(Backend::Direct, Backend::Direct).is_ok());
    assert!(validate::same_backend(Backend::Table, Backend::Table).is_ok());
    let err = validate::same_backend(Backend::Direct, Backend::Table).unwrap_err();

    match err {
        Error::Mismatch { left, right } => {
            assert_eq!(left, Backend::Direct);
            assert_eq!(right, Backend::Table);
        }
        _ => panic!("Expected Mismatch error"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::Range { value: 300 };
    assert_eq!(err.to_string(), "300 is not in the field range 0..256");

    let err = Error::DivisionByZero { operation: "invert" };
    assert_eq!(err.to_string(), "Division by zero in invert");

    let err = Error::Mismatch {
        left: Backend::Direct,
        right: Backend::Table,
    };
    assert_eq!(err.to_string(), "Backend mismatch: Direct vs Table");
}
