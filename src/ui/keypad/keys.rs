use crate::calc::{Operator, Token};

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// One keypad button: its rendered label and the token it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub token: Token,
}

const fn key(label: &'static str, token: Token) -> Key {
    Key { label, token }
}

/// The full keypad wiring. Each button is bound to exactly one token here;
/// nothing is inferred from label text at runtime.
pub const KEYPAD: [[Key; COLS]; ROWS] = [
    [
        key("AC", Token::Clear),
        key("DEL", Token::DeleteLast),
        key("(", Token::OpenParen),
        key(")", Token::CloseParen),
    ],
    [
        key("7", Token::Digit(7)),
        key("8", Token::Digit(8)),
        key("9", Token::Digit(9)),
        key("÷", Token::Op(Operator::Divide)),
    ],
    [
        key("4", Token::Digit(4)),
        key("5", Token::Digit(5)),
        key("6", Token::Digit(6)),
        key("×", Token::Op(Operator::Multiply)),
    ],
    [
        key("1", Token::Digit(1)),
        key("2", Token::Digit(2)),
        key("3", Token::Digit(3)),
        key("−", Token::Op(Operator::Subtract)),
    ],
    [
        key("0", Token::Digit(0)),
        key(".", Token::Point),
        key("=", Token::Evaluate),
        key("+", Token::Op(Operator::Add)),
    ],
];

/// Look up the button at a grid position.
pub fn key_at(row: usize, col: usize) -> Option<Key> {
    KEYPAD.get(row).and_then(|r| r.get(col)).copied()
}
