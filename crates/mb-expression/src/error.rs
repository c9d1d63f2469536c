use thiserror::Error;

/// Raised once at parse time; aborts loading the style rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression \"{0}\" invalid, it may be misspelled or not supported")]
    UnknownOperator(String),

    #[error("\"{operator}\" operator {message}")]
    ArityOrShape {
        operator: &'static str,
        message: String,
    },

    #[error("\"literal\" operator expects exactly one argument")]
    MalformedLiteral,
}

/// Raised per evaluation call; always caller-visible, never swallowed into a
/// default value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("\"{operator}\" operator {message}")]
    ArityOrShape {
        operator: &'static str,
        message: String,
    },

    #[error("no operand of \"{0}\" matched the expected variant")]
    NoMatchingVariant(&'static str),

    #[error("\"{0}\" is not supported")]
    Unimplemented(&'static str),

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },
}
