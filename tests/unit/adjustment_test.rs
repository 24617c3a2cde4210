//! Unit tests for brightness argument parsing

use backlight::Operation;
use backlight::cli::{ParseAdjustmentError, parse_operation};

// ============================================================================
// Accepted Forms
// ============================================================================

#[test]
fn test_parse_set() {
    assert_eq!(parse_operation("=50"), Ok(Operation::Set(50)));
}

#[test]
fn test_parse_increase() {
    assert_eq!(parse_operation("+10"), Ok(Operation::Increase(10)));
}

#[test]
fn test_parse_decrease() {
    assert_eq!(parse_operation("-10"), Ok(Operation::Decrease(10)));
}

#[test]
fn test_parse_zero() {
    assert_eq!(parse_operation("=0"), Ok(Operation::Set(0)));
}

#[test]
fn test_parse_leading_zeros() {
    assert_eq!(parse_operation("=00"), Ok(Operation::Set(0)));
    assert_eq!(parse_operation("+007"), Ok(Operation::Increase(7)));
}

#[test]
fn test_parse_above_hundred_is_accepted() {
    assert_eq!(parse_operation("+500"), Ok(Operation::Increase(500)));
}

#[test]
fn test_parse_overflow_saturates() {
    assert_eq!(
        parse_operation("=99999999999999999999999"),
        Ok(Operation::Set(u64::MAX))
    );
}

// ============================================================================
// Rejected Forms
// ============================================================================

#[test]
fn test_parse_empty() {
    assert_eq!(parse_operation(""), Err(ParseAdjustmentError::Empty));
}

#[test]
fn test_parse_bare_number_has_no_operator() {
    assert_eq!(
        parse_operation("50"),
        Err(ParseAdjustmentError::UnknownOperator('5'))
    );
}

#[test]
fn test_parse_letters() {
    assert_eq!(
        parse_operation("abc"),
        Err(ParseAdjustmentError::UnknownOperator('a'))
    );
}

#[test]
fn test_parse_operator_without_percent() {
    for input in ["=", "+", "-"] {
        assert_eq!(
            parse_operation(input),
            Err(ParseAdjustmentError::MissingPercent),
            "input {input:?}"
        );
    }
}

#[test]
fn test_parse_trailing_garbage() {
    assert_eq!(
        parse_operation("+5%"),
        Err(ParseAdjustmentError::InvalidPercent("5%".to_string()))
    );
    assert_eq!(
        parse_operation("=50abc"),
        Err(ParseAdjustmentError::InvalidPercent("50abc".to_string()))
    );
}

#[test]
fn test_parse_inner_sign_rejected() {
    assert!(parse_operation("=+5").is_err());
    assert!(parse_operation("--5").is_err());
    assert!(parse_operation("+-5").is_err());
}

#[test]
fn test_parse_whitespace_rejected() {
    assert!(parse_operation("= 5").is_err());
    assert!(parse_operation("=5 ").is_err());
    assert!(parse_operation(" =5").is_err());
}

#[test]
fn test_parse_fraction_rejected() {
    assert!(parse_operation("=12.5").is_err());
}

#[test]
fn test_parse_non_ascii_digits_rejected() {
    assert!(parse_operation("=٥").is_err());
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = parse_operation("*5").unwrap_err();
    assert!(err.to_string().contains("'*'"));

    let err = parse_operation("=x").unwrap_err();
    assert!(err.to_string().contains("'x'"));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_operation_display_matches_argument_form() {
    for input in ["=50", "+10", "-3"] {
        assert_eq!(parse_operation(input).unwrap().to_string(), input);
    }
    assert_eq!(Operation::Get.to_string(), "get");
}
