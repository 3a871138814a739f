use crate::calc::state::{CalcState, Phase};
use crate::calc::token::Token;
use crate::eval;
use crate::mvi::Reducer;

/// What the display shows when evaluation fails.
pub const ERROR_MARKER: &str = "Error";

pub struct CalcReducer;

impl Reducer for CalcReducer {
    type State = CalcState;
    type Intent = Token;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let CalcState {
            mut buffer,
            precision,
            ..
        } = state;

        match intent {
            Token::Clear => CalcState {
                buffer: String::new(),
                phase: Phase::Accumulating,
                precision,
            },
            Token::DeleteLast => {
                // No-op on an empty buffer. pop removes one char, which
                // handles the multi-byte operator glyphs correctly.
                buffer.pop();
                CalcState {
                    buffer,
                    phase: Phase::Accumulating,
                    precision,
                }
            }
            Token::Evaluate => {
                let buffer = match eval::evaluate(&buffer) {
                    Ok(value) => eval::format_value(value, precision),
                    Err(err) => {
                        tracing::debug!(expression = %buffer, error = %err, "evaluation failed");
                        ERROR_MARKER.to_string()
                    }
                };
                CalcState {
                    buffer,
                    phase: Phase::Resolved,
                    precision,
                }
            }
            token => {
                // Append tokens concatenate unconditionally; well-formedness
                // is only checked at evaluate time. After an evaluate the
                // next append extends the result text rather than starting
                // over.
                if let Some(ch) = token.text() {
                    buffer.push(ch);
                }
                CalcState {
                    buffer,
                    phase: Phase::Accumulating,
                    precision,
                }
            }
        }
    }
}
