use thiserror::Error;

/// Errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The buffer held no expression at all.
    #[error("empty expression")]
    Empty,

    /// A character the lexer does not recognize.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    /// A numeric literal that does not parse (e.g. `1.2.3`).
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A lexeme in a position where the grammar does not allow it.
    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),

    /// The expression ended where the grammar required more input.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An opening parenthesis without its closing partner, or vice versa.
    #[error("unbalanced parenthesis")]
    UnbalancedParen,

    #[error("division by zero")]
    DivisionByZero,

    /// Overflow to infinity or NaN during evaluation.
    #[error("result is not a finite number")]
    NonFinite,
}
