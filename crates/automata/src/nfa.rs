use crate::alphabet::{self, IntoSymbol, Symbol};
use crate::automaton::FiniteAutomaton;
use crate::error::{check_size, check_state, Result};
use crate::state_set::StateSet;
use crate::symbol_set::SymbolSet;
use crate::transition::TransitionRow;

#[derive(Debug, Clone)]
struct NFAState {
    transitions: TransitionRow<StateSet>,
    accepting: bool,
}

/// Nondeterministic finite automaton over the 128-symbol alphabet, without
/// epsilon transitions. State 0 is the start state.
///
/// Execution tracks the configuration: the set of every state reachable on the
/// input consumed so far. An empty configuration is dead and stays dead.
#[derive(Debug, Clone)]
pub struct NFA {
    states: Vec<NFAState>,
    // kept in sync with `states[i].accepting`
    accepting: StateSet,
    current: StateSet,
}

impl NFA {
    pub fn new(nstates: usize) -> Result<NFA> {
        let nstates = check_size(nstates)?;
        let state = NFAState {
            transitions: TransitionRow::new(),
            accepting: false,
        };

        Ok(NFA {
            states: vec![state; nstates],
            accepting: StateSet::new(),
            current: NFA::start_configuration(),
        })
    }

    pub fn start_configuration() -> StateSet {
        StateSet::singleton(0)
    }

    pub fn size(&self) -> usize {
        self.states.len()
    }

    fn check(&self, state: usize) -> Result<usize> {
        Ok(check_state(state, self.states.len())?)
    }

    pub fn get_transitions(&self, src: usize, symbol: impl IntoSymbol) -> Result<&StateSet> {
        let src = self.check(src)?;
        let symbol = symbol.into_symbol()?;
        Ok(self.states[src].transitions.get(symbol))
    }

    /// Adds `dst` to the targets of `src` on `symbol`. Adding the same triple
    /// twice is the same as adding it once.
    pub fn add_transition(&mut self, src: usize, symbol: impl IntoSymbol, dst: usize) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        let symbol = symbol.into_symbol()?;
        self.states[src].transitions.set(symbol, dst);
        Ok(())
    }

    pub fn add_transition_str(&mut self, src: usize, symbols: &str, dst: usize) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        let symbols = symbols.parse::<SymbolSet>()?;
        self.states[src].transitions.set_symbols(&symbols, dst);
        Ok(())
    }

    pub fn add_transition_all(&mut self, src: usize, dst: usize) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        self.states[src].transitions.set_all(dst);
        Ok(())
    }

    /// Adds `dst` on every symbol not in `exceptions`.
    pub fn add_transition_exception(&mut self, src: usize, dst: usize, exceptions: &str) -> Result<()> {
        let src = self.check(src)?;
        let dst = self.check(dst)?;
        let exceptions = exceptions.parse::<SymbolSet>()?;
        self.states[src].transitions.set_except(&exceptions, dst);
        Ok(())
    }

    pub fn set_accepting(&mut self, state: usize, value: bool) -> Result<()> {
        let state = self.check(state)?;
        self.states[state].accepting = value;
        if value {
            self.accepting.insert(state);
        } else {
            self.accepting.remove(state);
        }
        Ok(())
    }

    pub fn get_accepting(&self, state: usize) -> Result<bool> {
        let state = self.check(state)?;
        Ok(self.states[state].accepting)
    }

    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting
    }

    pub fn current_states(&self) -> &StateSet {
        &self.current
    }

    pub fn reset(&mut self) {
        self.current = NFA::start_configuration();
    }

    /// Runs `input` from the start configuration `{0}`. Nothing carries over from
    /// an earlier call. The configuration reached is left in
    /// [`NFA::current_states`].
    pub fn execute(&mut self, input: &str) -> Result<bool> {
        self.reset();
        let symbols = alphabet::symbols(input)?;
        self.current = self.run(NFA::start_configuration(), symbols);
        Ok(self.is_accepting_configuration(&self.current))
    }

    /// Same verdict as [`NFA::execute`] on a private working set.
    pub fn accepts(&self, input: &str) -> Result<bool> {
        let symbols = alphabet::symbols(input)?;
        let end = self.run(NFA::start_configuration(), symbols);
        Ok(self.is_accepting_configuration(&end))
    }

    fn run(&self, mut configuration: StateSet, symbols: impl Iterator<Item = Symbol>) -> StateSet {
        for symbol in symbols {
            configuration = self.delta(&configuration, symbol);
            if configuration.is_empty() {
                break;
            }
        }
        configuration
    }

    /// Union of the transitions of every state in `configuration` on `symbol`.
    pub fn delta(&self, configuration: &StateSet, symbol: Symbol) -> StateSet {
        let mut next = StateSet::new();
        for state in configuration.iter() {
            next.union_with(self.states[state].transitions.get(symbol));
        }
        next
    }

    pub fn is_accepting_configuration(&self, configuration: &StateSet) -> bool {
        configuration.intersects(&self.accepting)
    }

    pub fn to_graph(&self) -> petgraph::Graph<String, String> {
        crate::graph::to_graph(self)
    }

    pub fn to_dot(&self) -> String {
        crate::graph::to_dot(self)
    }
}

impl FiniteAutomaton for NFA {
    fn size(&self) -> usize {
        NFA::size(self)
    }

    fn get_accepting(&self, state: usize) -> Result<bool> {
        NFA::get_accepting(self, state)
    }

    fn reset(&mut self) {
        NFA::reset(self)
    }

    fn execute(&mut self, input: &str) -> Result<bool> {
        NFA::execute(self, input)
    }

    fn accepts(&self, input: &str) -> Result<bool> {
        NFA::accepts(self, input)
    }

    fn edges(&self) -> Vec<(usize, Symbol, usize)> {
        self.states
            .iter()
            .enumerate()
            .flat_map(|(src, state)| {
                state
                    .transitions
                    .iter()
                    .flat_map(move |(symbol, targets)| targets.iter().map(move |dst| (src, symbol, dst)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InvalidArgument};

    // strings ending in "man"
    fn ends_in_man() -> NFA {
        let mut nfa = NFA::new(4).unwrap();
        nfa.add_transition_all(0, 0).unwrap();
        nfa.add_transition(0, 'm', 1).unwrap();
        nfa.add_transition(1, 'a', 2).unwrap();
        nfa.add_transition(2, 'n', 3).unwrap();
        nfa.set_accepting(3, true).unwrap();
        nfa
    }

    #[test]
    fn zero_states_is_rejected() {
        assert_eq!(
            NFA::new(0).err(),
            Some(Error::InvalidArgument(InvalidArgument::StateCount(0)))
        );
    }

    #[test]
    fn add_transition_is_idempotent() {
        let mut once = NFA::new(2).unwrap();
        once.add_transition(0, 'a', 1).unwrap();
        let mut twice = once.clone();
        twice.add_transition(0, 'a', 1).unwrap();

        assert_eq!(once.get_transitions(0, 'a').unwrap(), twice.get_transitions(0, 'a').unwrap());
        assert_eq!(twice.get_transitions(0, 'a').unwrap().len(), 1);
    }

    #[test]
    fn transitions_accumulate() {
        let mut nfa = NFA::new(3).unwrap();
        nfa.add_transition(0, 'a', 1).unwrap();
        nfa.add_transition_str(0, "ab", 2).unwrap();
        nfa.add_transition_exception(0, 0, "b").unwrap();

        let on_a: Vec<usize> = nfa.get_transitions(0, 'a').unwrap().iter().collect();
        let on_b: Vec<usize> = nfa.get_transitions(0, 'b').unwrap().iter().collect();
        assert_eq!(on_a, vec![0, 1, 2]);
        assert_eq!(on_b, vec![2]);
    }

    #[test]
    fn set_accepting_twice_counts_once() {
        let mut nfa = NFA::new(3).unwrap();
        nfa.set_accepting(2, true).unwrap();
        nfa.set_accepting(2, true).unwrap();
        assert_eq!(nfa.accepting_states().len(), 1);
        assert!(nfa.get_accepting(2).unwrap());

        nfa.set_accepting(2, false).unwrap();
        assert!(nfa.accepting_states().is_empty());
        assert!(!nfa.get_accepting(2).unwrap());
    }

    #[test]
    fn execute_resets_between_runs() {
        let mut nfa = ends_in_man();
        assert_eq!(nfa.execute("woman"), Ok(true));
        assert!(nfa.current_states().contains(3));
        assert_eq!(nfa.execute("ma"), Ok(false));
        assert_eq!(nfa.execute("n"), Ok(false));
        assert_eq!(nfa.execute("maan"), Ok(false));
        assert_eq!(nfa.execute("man"), Ok(true));
    }

    #[test]
    fn empty_configuration_is_absorbing() {
        let mut nfa = NFA::new(2).unwrap();
        nfa.add_transition(0, 'a', 1).unwrap();
        nfa.set_accepting(1, true).unwrap();

        assert_eq!(nfa.execute("ab"), Ok(false));
        assert!(nfa.current_states().is_empty());
        assert_eq!(nfa.execute("aba"), Ok(false));
    }

    #[test]
    fn empty_input_checks_start_state() {
        let mut nfa = ends_in_man();
        assert_eq!(nfa.accepts(""), Ok(false));
        nfa.set_accepting(0, true).unwrap();
        assert_eq!(nfa.accepts(""), Ok(true));
    }

    #[test]
    fn delta_unions_targets() {
        let nfa = ends_in_man();
        let m = Symbol::new(b'm' as u32).unwrap();
        let from: StateSet = [0, 1].into_iter().collect();
        assert_eq!(nfa.delta(&from, m).iter().collect::<Vec<_>>(), vec![0, 1]);
    }
}
