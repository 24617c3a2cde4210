use thiserror::Error;

use crate::brightness::Operation;

/// Why a brightness argument was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAdjustmentError {
    #[error("argument is empty")]
    Empty,

    #[error("unknown operator '{0}', expected '=', '+' or '-'")]
    UnknownOperator(char),

    #[error("missing percent after the operator")]
    MissingPercent,

    #[error("'{0}' is not a non-negative integer percent")]
    InvalidPercent(String),
}

/// Parses a brightness argument into an [`Operation`]
///
/// Accepted forms:
/// - `=PERCENT` - set
/// - `+PERCENT` - increase
/// - `-PERCENT` - decrease
///
/// `PERCENT` is one or more ASCII digits and must make up the rest of the
/// argument. Percents are not capped here; a value too large for `u64`
/// saturates and clamps to 100% like any other value above 100.
///
/// # Examples
///
/// ```
/// use backlight::brightness::Operation;
/// use backlight::cli::parse_operation;
///
/// assert_eq!(parse_operation("=40"), Ok(Operation::Set(40)));
/// assert_eq!(parse_operation("+5"), Ok(Operation::Increase(5)));
/// assert_eq!(parse_operation("-10"), Ok(Operation::Decrease(10)));
/// assert!(parse_operation("50").is_err());
/// assert!(parse_operation("+5%").is_err());
/// ```
pub fn parse_operation(input: &str) -> Result<Operation, ParseAdjustmentError> {
    let mut chars = input.chars();
    let operator = chars.next().ok_or(ParseAdjustmentError::Empty)?;
    let operation: fn(u64) -> Operation = match operator {
        '=' => Operation::Set,
        '+' => Operation::Increase,
        '-' => Operation::Decrease,
        other => return Err(ParseAdjustmentError::UnknownOperator(other)),
    };

    parse_percent(chars.as_str()).map(operation)
}

fn parse_percent(digits: &str) -> Result<u64, ParseAdjustmentError> {
    if digits.is_empty() {
        return Err(ParseAdjustmentError::MissingPercent);
    }
    // u64::from_str would also take a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseAdjustmentError::InvalidPercent(digits.to_string()));
    }

    Ok(digits.parse().unwrap_or(u64::MAX))
}
