use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NotPrefixOperator { .. } => "NotPrefixOperator",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected an operator here",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
            ErrorImpl::NotPrefixOperator { op } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot start an expression",
                op
            )),
            ErrorImpl::ExpectedToken { expected, .. } => match expected {
                ')' => ErrorTip::Suggestion(String::from(
                    "Expected `)`, did you forget to close a parenthesis?",
                )),
                ']' => ErrorTip::Suggestion(String::from(
                    "Expected `]`, did you forget to close an index?",
                )),
                ':' => ErrorTip::Suggestion(String::from(
                    "A ternary `?` needs a matching `:`",
                )),
                expected => {
                    ErrorTip::Suggestion(format!("Expected `{}` at this position", expected))
                }
            },
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("operator {op:?} cannot begin an expression")]
    NotPrefixOperator { op: char },
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedToken { expected: char, found: String },
}
