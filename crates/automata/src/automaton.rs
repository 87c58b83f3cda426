use crate::alphabet::Symbol;
use crate::error::Result;

/// Behaviour shared by [`DFA`](crate::DFA) and [`NFA`](crate::NFA), so callers
/// can run or render either kind without knowing which one they hold.
pub trait FiniteAutomaton {
    /// Number of states, fixed at construction.
    fn size(&self) -> usize;

    fn get_accepting(&self, state: usize) -> Result<bool>;

    /// Puts the automaton back into its start configuration.
    fn reset(&mut self);

    /// Consumes `input` and reports whether the automaton ends up accepting.
    fn execute(&mut self, input: &str) -> Result<bool>;

    /// Whole-string acceptance from the start configuration. Leaves `self` untouched.
    fn accepts(&self, input: &str) -> Result<bool>;

    /// Every `(src, symbol, dst)` triple, ordered by source, then symbol, then destination.
    fn edges(&self) -> Vec<(usize, Symbol, usize)>;
}
