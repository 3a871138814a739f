use crate::mvi::Intent;

/// One discrete input unit accepted by the accumulator.
///
/// Tokens are transient: the input layer produces one per button
/// activation and the reducer consumes it immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit 0–9.
    Digit(u8),
    /// The decimal point.
    Point,
    /// A binary operator.
    Op(Operator),
    OpenParen,
    CloseParen,
    /// Clear the whole buffer (AC).
    Clear,
    /// Remove the last character (DEL).
    DeleteLast,
    /// Evaluate the buffer (=).
    Evaluate,
}

impl Intent for Token {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The glyph appended to the buffer and shown on the keypad.
    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }
}

impl Token {
    /// The textual form this token appends to the buffer.
    ///
    /// Control tokens (clear, delete, evaluate) append nothing.
    pub fn text(self) -> Option<char> {
        match self {
            Token::Digit(d) => Some((b'0' + d) as char),
            Token::Point => Some('.'),
            Token::Op(op) => Some(op.glyph()),
            Token::OpenParen => Some('('),
            Token::CloseParen => Some(')'),
            Token::Clear | Token::DeleteLast | Token::Evaluate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_their_characters() {
        assert_eq!(Token::Digit(0).text(), Some('0'));
        assert_eq!(Token::Digit(9).text(), Some('9'));
    }

    #[test]
    fn control_tokens_have_no_text() {
        assert_eq!(Token::Clear.text(), None);
        assert_eq!(Token::DeleteLast.text(), None);
        assert_eq!(Token::Evaluate.text(), None);
    }

    #[test]
    fn operator_glyphs_are_lexable() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            let expr = format!("1{}2", op.glyph());
            assert!(crate::eval::evaluate(&expr).is_ok(), "glyph {:?}", op);
        }
    }
}
