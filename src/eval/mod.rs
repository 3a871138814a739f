//! Arithmetic expression evaluation.
//!
//! A dedicated pipeline replaces any generic "interpret the buffer as code"
//! shortcut: [`lexer`] turns the text into lexemes, [`parser`] builds an
//! expression tree by recursive descent, and the tree evaluates to an `f64`.
//! Every failure mode is a distinct [`EvalError`] variant.

mod error;
mod lexer;
mod parser;

pub use error::EvalError;
pub use lexer::{tokenize, Lexeme};
pub use parser::{parse, BinOp, Expr};

/// Evaluate an expression string to a finite number.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    if input.trim().is_empty() {
        return Err(EvalError::Empty);
    }
    let lexemes = tokenize(input)?;
    let expr = parse(&lexemes)?;
    let value = expr.eval()?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// Format a result for the display.
///
/// Without a configured precision the shortest round-trip form is used,
/// so whole numbers print without a trailing `.0`. With a precision the
/// value is rounded and trailing zeros are trimmed.
pub fn format_value(value: f64, precision: Option<u32>) -> String {
    // Collapse -0.0 so a result of zero always displays as "0".
    let value = if value == 0.0 { 0.0 } else { value };

    match precision {
        None => format!("{}", value),
        Some(places) => {
            let formatted = format!("{:.*}", places as usize, value);
            if formatted.contains('.') {
                formatted
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            } else {
                formatted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(format_value(5.0, None), "5");
        assert_eq!(format_value(-3.0, None), "-3");
    }

    #[test]
    fn negative_zero_displays_as_zero() {
        assert_eq!(format_value(-0.0, None), "0");
    }

    #[test]
    fn precision_rounds_and_trims() {
        assert_eq!(format_value(1.0 / 3.0, Some(4)), "0.3333");
        assert_eq!(format_value(0.5, Some(4)), "0.5");
        assert_eq!(format_value(2.0, Some(4)), "2");
    }

    #[test]
    fn evaluate_empty_is_an_error() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("   "), Err(EvalError::Empty));
    }

    #[test]
    fn evaluate_respects_precedence() {
        assert_eq!(evaluate("2+3×4"), Ok(14.0));
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
    }

    #[test]
    fn evaluate_rejects_division_by_zero() {
        assert_eq!(evaluate("1÷0"), Err(EvalError::DivisionByZero));
    }
}
