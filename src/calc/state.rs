use crate::mvi::UiState;

/// Which side of an evaluation the buffer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The buffer holds a partially or fully typed expression.
    #[default]
    Accumulating,
    /// The buffer holds the result (or error marker) of the last evaluate.
    Resolved,
}

/// The accumulator's state: the expression buffer plus display settings.
///
/// The buffer always reflects the exact sequence of accepted tokens since
/// the last clear, except that evaluate replaces it with a result or the
/// error marker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalcState {
    pub buffer: String,
    pub phase: Phase,
    /// Optional rounding for results, carried from config through every
    /// transition.
    pub precision: Option<u32>,
}

impl UiState for CalcState {}

impl CalcState {
    pub fn new(precision: Option<u32>) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }
}
