use thiserror::Error;

/// A caller passed an argument the automaton cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("an automaton needs at least one state, got {0}")]
    StateCount(usize),
    #[error("state {state} is out of range for an automaton with {size} states")]
    StateOutOfRange { state: usize, size: usize },
    #[error("symbol code {0} is outside the 128-symbol alphabet")]
    SymbolOutOfRange(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error("subset construction exceeded the limit of {limit} DFA states")]
    StateLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_state(state: usize, size: usize) -> std::result::Result<usize, InvalidArgument> {
    if state < size {
        Ok(state)
    } else {
        Err(InvalidArgument::StateOutOfRange { state, size })
    }
}

pub(crate) fn check_size(nstates: usize) -> std::result::Result<usize, InvalidArgument> {
    if nstates == 0 {
        Err(InvalidArgument::StateCount(nstates))
    } else {
        Ok(nstates)
    }
}
