use crate::alphabet::{self, IntoSymbol, Symbol};
use crate::automaton::FiniteAutomaton;
use crate::error::{check_size, check_state, Result};
use crate::state_set::StateSet;
use crate::symbol_set::SymbolSet;
use crate::transition::TransitionRow;

/// Where a DFA run currently is. `Dead` is reached by following an absent
/// transition; it has no outgoing transitions and never accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    At(usize),
    Dead,
}

impl Cursor {
    pub fn state(self) -> Option<usize> {
        match self {
            Cursor::At(state) => Some(state),
            Cursor::Dead => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DFAState {
    pub(crate) transitions: TransitionRow<Option<usize>>,
    pub(crate) accepting: bool,
}

impl DFAState {
    pub(crate) fn new() -> DFAState {
        DFAState {
            transitions: TransitionRow::new(),
            accepting: false,
        }
    }
}

/// Deterministic finite automaton over the 128-symbol alphabet. State 0 is the
/// start state.
#[derive(Debug, Clone)]
pub struct DFA {
    states: Vec<DFAState>,
    cursor: Cursor,
}

impl DFA {
    /// Allocates `nstates` states with no transitions and nothing accepting.
    pub fn new(nstates: usize) -> Result<DFA> {
        let nstates = check_size(nstates)?;
        Ok(DFA::from_states(vec![DFAState::new(); nstates]))
    }

    // callers guarantee every stored destination is in range
    pub(crate) fn from_states(states: Vec<DFAState>) -> DFA {
        debug_assert!(!states.is_empty());
        DFA {
            states,
            cursor: Cursor::At(0),
        }
    }

    pub fn size(&self) -> usize {
        self.states.len()
    }

    fn check(&self, state: usize) -> Result<usize> {
        Ok(check_state(state, self.states.len())?)
    }

    pub fn get_transition(&self, src: usize, symbol: impl IntoSymbol) -> Result<Option<usize>> {
        let src = self.check(src)?;
        let symbol = symbol.into_symbol()?;
        Ok(*self.states[src].transitions.get(symbol))
    }

    pub fn set_transition(&mut self, src: usize, symbol: impl IntoSymbol, dst: usize) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        let symbol = symbol.into_symbol()?;
        self.states[src].transitions.set(symbol, dst);
        Ok(())
    }

    /// Sets the transition on every symbol appearing in `symbols`.
    pub fn set_transition_str(&mut self, src: usize, symbols: &str, dst: usize) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        let symbols = symbols.parse::<SymbolSet>()?;
        self.states[src].transitions.set_symbols(&symbols, dst);
        Ok(())
    }

    pub fn set_transition_all(&mut self, src: usize, dst: usize) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        self.states[src].transitions.set_all(dst);
        Ok(())
    }

    /// Sets the transition on every symbol *not* in `exceptions`. Transitions on
    /// the excepted symbols are left as they were.
    pub fn set_transition_exception(&mut self, src: usize, dst: usize, exceptions: &str) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        let exceptions = exceptions.parse::<SymbolSet>()?;
        self.states[src].transitions.set_except(&exceptions, dst);
        Ok(())
    }

    pub fn set_accepting(&mut self, state: usize, value: bool) -> Result<()> {
        let state = self.check(state)?;
        self.states[state].accepting = value;
        Ok(())
    }

    pub fn get_accepting(&self, state: usize) -> Result<bool> {
        let state = self.check(state)?;
        Ok(self.states[state].accepting)
    }

    pub fn accepting_states(&self) -> StateSet {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.accepting)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn current_state(&self) -> Cursor {
        self.cursor
    }

    pub fn set_current_state(&mut self, state: usize) -> Result<()> {
        let state = self.check(state)?;
        self.cursor = Cursor::At(state);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cursor = Cursor::At(0);
    }

    /// Runs `input` starting from the current cursor and leaves the cursor where
    /// the run ended. Call [`DFA::reset`] first for a fresh run.
    ///
    /// Fails only if `input` contains a character outside the alphabet, in which
    /// case the cursor is not moved.
    pub fn execute(&mut self, input: &str) -> Result<bool> {
        let symbols = alphabet::symbols(input)?;
        self.cursor = self.run(self.cursor, symbols);
        Ok(self.is_accepting(self.cursor))
    }

    /// Same verdict as `reset` followed by `execute`, without touching the cursor.
    pub fn accepts(&self, input: &str) -> Result<bool> {
        let symbols = alphabet::symbols(input)?;
        let end = self.run(Cursor::At(0), symbols);
        Ok(self.is_accepting(end))
    }

    fn step(&self, cursor: Cursor, symbol: Symbol) -> Cursor {
        match cursor {
            Cursor::At(state) => match self.states[state].transitions.get(symbol) {
                Some(next) => Cursor::At(*next),
                None => Cursor::Dead,
            },
            Cursor::Dead => Cursor::Dead,
        }
    }

    fn run(&self, mut cursor: Cursor, symbols: impl Iterator<Item = Symbol>) -> Cursor {
        for symbol in symbols {
            cursor = self.step(cursor, symbol);
            if cursor == Cursor::Dead {
                break;
            }
        }
        cursor
    }

    fn is_accepting(&self, cursor: Cursor) -> bool {
        match cursor {
            Cursor::At(state) => self.states[state].accepting,
            Cursor::Dead => false,
        }
    }

    pub fn to_graph(&self) -> petgraph::Graph<String, String> {
        crate::graph::to_graph(self)
    }

    pub fn to_dot(&self) -> String {
        crate::graph::to_dot(self)
    }
}

impl FiniteAutomaton for DFA {
    fn size(&self) -> usize {
        DFA::size(self)
    }

    fn get_accepting(&self, state: usize) -> Result<bool> {
        DFA::get_accepting(self, state)
    }

    fn reset(&mut self) {
        DFA::reset(self)
    }

    fn execute(&mut self, input: &str) -> Result<bool> {
        DFA::execute(self, input)
    }

    fn accepts(&self, input: &str) -> Result<bool> {
        DFA::accepts(self, input)
    }

    fn edges(&self) -> Vec<(usize, Symbol, usize)> {
        self.states
            .iter()
            .enumerate()
            .flat_map(|(src, state)| {
                state
                    .transitions
                    .iter()
                    .filter_map(move |(symbol, dst)| dst.map(|dst| (src, symbol, dst)))
            })
            .collect()
    }
}
