mod alphabet;
mod automaton;
mod dfa;
mod error;
pub mod graph;
mod nfa;
mod state_set;
mod subset;
mod symbol_set;
mod transition;

pub use alphabet::{IntoSymbol, Symbol, SymbolIterator, ALPHABET_SIZE};
pub use automaton::FiniteAutomaton;
pub use dfa::{Cursor, DFA};
pub use error::{Error, InvalidArgument, Result};
pub use graph::{to_dot, to_graph};
pub use nfa::NFA;
pub use state_set::StateSet;
pub use subset::{nfa_to_dfa, Determinized, Determinizer};
pub use symbol_set::SymbolSet;
