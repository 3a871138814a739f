use crate::eval::error::EvalError;

/// A single lexeme of the expression grammar.
///
/// The keypad glyphs (`×`, `÷`, `−`) and their ASCII forms (`*`, `/`, `-`)
/// lex identically, so expressions typed on a keyboard and expressions built
/// from the keypad evaluate the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
}

/// Tokenize an expression string.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, EvalError> {
    let mut lexemes = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            ' ' | '\t' => {
                chars.next();
            }
            '+' => {
                chars.next();
                lexemes.push(Lexeme::Plus);
            }
            '-' | '−' => {
                chars.next();
                lexemes.push(Lexeme::Minus);
            }
            '*' | '×' => {
                chars.next();
                lexemes.push(Lexeme::Star);
            }
            '/' | '÷' => {
                chars.next();
                lexemes.push(Lexeme::Slash);
            }
            '(' => {
                chars.next();
                lexemes.push(Lexeme::OpenParen);
            }
            ')' => {
                chars.next();
                lexemes.push(Lexeme::CloseParen);
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&digit) = chars.peek() {
                    if digit.is_ascii_digit() || digit == '.' {
                        literal.push(digit);
                        chars.next();
                    } else {
                        break;
                    }
                }
                // A literal with no digits ("." ) or too many points
                // ("1.2.3") fails here rather than at parse time.
                if !literal.chars().any(|c| c.is_ascii_digit()) {
                    return Err(EvalError::InvalidNumber(literal));
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal))?;
                lexemes.push(Lexeme::Number(value));
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_digits_and_operators() {
        let lexemes = tokenize("12+8").unwrap();
        assert_eq!(
            lexemes,
            vec![Lexeme::Number(12.0), Lexeme::Plus, Lexeme::Number(8.0)]
        );
    }

    #[test]
    fn keypad_glyphs_match_ascii_forms() {
        assert_eq!(tokenize("6×7"), tokenize("6*7"));
        assert_eq!(tokenize("8÷2"), tokenize("8/2"));
        assert_eq!(tokenize("5−3"), tokenize("5-3"));
    }

    #[test]
    fn leading_point_literal_is_accepted() {
        let lexemes = tokenize(".5").unwrap();
        assert_eq!(lexemes, vec![Lexeme::Number(0.5)]);
    }

    #[test]
    fn double_point_literal_is_rejected() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(EvalError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn bare_point_is_rejected() {
        assert_eq!(tokenize("."), Err(EvalError::InvalidNumber(".".to_string())));
    }

    #[test]
    fn unknown_character_is_rejected() {
        assert_eq!(tokenize("2+x"), Err(EvalError::UnexpectedChar('x')));
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(tokenize(" 1 + 2 "), tokenize("1+2"));
    }
}
