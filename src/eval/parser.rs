use crate::eval::error::EvalError;
use crate::eval::lexer::Lexeme;

/// Binary operators, in evaluation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// A parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate the tree to a number.
    ///
    /// Division by zero is an error here rather than producing an infinity;
    /// overflow to a non-finite value is caught by the caller.
    pub fn eval(&self) -> Result<f64, EvalError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Negate(inner) => Ok(-inner.eval()?),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval()?;
                let rhs = rhs.eval()?;
                match op {
                    BinOp::Add => Ok(lhs + rhs),
                    BinOp::Subtract => Ok(lhs - rhs),
                    BinOp::Multiply => Ok(lhs * rhs),
                    BinOp::Divide => {
                        if rhs == 0.0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(lhs / rhs)
                        }
                    }
                }
            }
        }
    }
}

/// Parse a lexeme stream into an expression tree.
///
/// Grammar (standard precedence, left-associative):
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '-' factor | number | '(' expression ')'
/// ```
pub fn parse(lexemes: &[Lexeme]) -> Result<Expr, EvalError> {
    let mut parser = Parser { lexemes, pos: 0 };
    let expr = parser.expression()?;
    match parser.peek() {
        None => Ok(expr),
        // A stray closing parenthesis reads better as "unbalanced" than
        // as a generic unexpected token.
        Some(Lexeme::CloseParen) => Err(EvalError::UnbalancedParen),
        Some(_) => Err(EvalError::UnexpectedToken(parser.pos)),
    }
}

struct Parser<'a> {
    lexemes: &'a [Lexeme],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Lexeme> {
        self.lexemes.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Lexeme> {
        let lexeme = self.peek();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    fn expression(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.term()?;
        while let Some(lexeme) = self.peek() {
            let op = match lexeme {
                Lexeme::Plus => BinOp::Add,
                Lexeme::Minus => BinOp::Subtract,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.factor()?;
        while let Some(lexeme) = self.peek() {
            let op = match lexeme {
                Lexeme::Star => BinOp::Multiply,
                Lexeme::Slash => BinOp::Divide,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, EvalError> {
        match self.advance() {
            Some(Lexeme::Minus) => Ok(Expr::Negate(Box::new(self.factor()?))),
            Some(Lexeme::Number(value)) => Ok(Expr::Number(value)),
            Some(Lexeme::OpenParen) => {
                let inner = self.expression()?;
                match self.advance() {
                    Some(Lexeme::CloseParen) => Ok(inner),
                    _ => Err(EvalError::UnbalancedParen),
                }
            }
            Some(_) => Err(EvalError::UnexpectedToken(self.pos - 1)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}
