use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::alphabet::Symbol;
use crate::dfa::{DFA, DFAState};
use crate::error::{Error, Result};
use crate::nfa::NFA;
use crate::state_set::StateSet;

/// Subset construction, optionally bounded by the number of DFA states it may
/// create.
#[derive(Debug, Clone, Default)]
pub struct Determinizer {
    state_limit: Option<usize>,
}

/// Output of [`Determinizer::determinize`]: the DFA plus the NFA configuration
/// each of its states stands for.
#[derive(Debug, Clone)]
pub struct Determinized {
    dfa: DFA,
    configurations: Vec<StateSet>,
}

impl Determinized {
    pub fn dfa(&self) -> &DFA {
        &self.dfa
    }

    pub fn into_dfa(self) -> DFA {
        self.dfa
    }

    pub fn configuration(&self, dfa_state: usize) -> Option<&StateSet> {
        self.configurations.get(dfa_state)
    }

    /// Indexed by DFA state.
    pub fn configurations(&self) -> &[StateSet] {
        &self.configurations
    }
}

impl Determinizer {
    pub fn new() -> Determinizer {
        Determinizer { state_limit: None }
    }

    /// Fail with [`Error::StateLimitExceeded`] instead of creating more than
    /// `limit` DFA states.
    pub fn state_limit(mut self, limit: usize) -> Determinizer {
        self.state_limit = Some(limit);
        self
    }

    // creates a DFA from an NFA using subset construction
    // DFA state ids are handed out in breadth-first discovery order, symbols in code order
    pub fn determinize(&self, nfa: &NFA) -> Result<Determinized> {
        debug!(
            "subset construction over {} NFA states, limit {:?}",
            nfa.size(),
            self.state_limit
        );

        let mut states: Vec<DFAState> = Vec::new();
        let mut configurations: Vec<StateSet> = Vec::new();
        // configuration -> id
        let mut ids: HashMap<StateSet, usize> = HashMap::new();
        let mut work_queue: VecDeque<usize> = VecDeque::new();

        let initial = NFA::start_configuration();
        let id = self.add_configuration(nfa, initial, &mut states, &mut configurations, &mut ids)?;
        work_queue.push_back(id);

        while let Some(q) = work_queue.pop_front() {
            let configuration = configurations[q].clone();
            for symbol in Symbol::all() {
                let t = nfa.delta(&configuration, symbol);
                if t.is_empty() {
                    continue;
                }

                let target = match ids.get(&t) {
                    Some(&existing) => existing,
                    None => {
                        let fresh = self.add_configuration(nfa, t, &mut states, &mut configurations, &mut ids)?;
                        work_queue.push_back(fresh);
                        fresh
                    }
                };
                states[q].transitions.set(symbol, target);
            }
        }

        debug!("subset construction produced {} DFA states", states.len());

        Ok(Determinized {
            dfa: DFA::from_states(states),
            configurations,
        })
    }

    fn add_configuration(
        &self,
        nfa: &NFA,
        configuration: StateSet,
        states: &mut Vec<DFAState>,
        configurations: &mut Vec<StateSet>,
        ids: &mut HashMap<StateSet, usize>,
    ) -> Result<usize> {
        let id = states.len();
        if let Some(limit) = self.state_limit {
            if id >= limit {
                return Err(Error::StateLimitExceeded { limit });
            }
        }

        let mut state = DFAState::new();
        state.accepting = nfa.is_accepting_configuration(&configuration);
        trace!(
            "q{} = {}{}",
            id,
            configuration,
            if state.accepting { " (accepting)" } else { "" }
        );

        states.push(state);
        ids.insert(configuration.clone(), id);
        configurations.push(configuration);
        Ok(id)
    }
}

/// Converts `nfa` into a DFA recognizing the same language. The result is
/// independent of `nfa`.
pub fn nfa_to_dfa(nfa: &NFA) -> DFA {
    Determinizer::new()
        .determinize(nfa)
        .expect("subset construction without a state limit cannot fail")
        .into_dfa()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // 0 -a-> {1, 2}, 1 -b-> 3, 2 -b-> 3, 3 accepting
    fn diamond() -> NFA {
        let mut nfa = NFA::new(4).unwrap();
        nfa.add_transition(0, 'a', 1).unwrap();
        nfa.add_transition(0, 'a', 2).unwrap();
        nfa.add_transition(1, 'b', 3).unwrap();
        nfa.add_transition(2, 'b', 3).unwrap();
        nfa.set_accepting(3, true).unwrap();
        nfa
    }

    #[test]
    fn configurations_are_discovered_breadth_first() {
        init();
        let result = Determinizer::new().determinize(&diamond()).unwrap();
        let shown: Vec<String> = result.configurations().iter().map(|c| c.to_string()).collect();
        assert_eq!(shown, vec!["{0}", "{1, 2}", "{3}"]);

        let dfa = result.dfa();
        assert_eq!(dfa.size(), 3);
        assert_eq!(dfa.get_transition(0, 'a'), Ok(Some(1)));
        assert_eq!(dfa.get_transition(1, 'b'), Ok(Some(2)));
        assert_eq!(dfa.get_transition(0, 'b'), Ok(None));
        assert_eq!(dfa.accepting_states().iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn unreachable_nfa_states_do_not_appear() {
        init();
        let mut nfa = NFA::new(3).unwrap();
        nfa.add_transition(2, 'z', 2).unwrap();
        nfa.set_accepting(2, true).unwrap();

        let result = Determinizer::new().determinize(&nfa).unwrap();
        assert_eq!(result.configurations().len(), 1);
        assert_eq!(result.dfa().accepting_states().len(), 0);
    }

    #[test]
    fn accepting_start_configuration() {
        init();
        let mut nfa = NFA::new(1).unwrap();
        nfa.set_accepting(0, true).unwrap();
        let dfa = nfa_to_dfa(&nfa);
        assert_eq!(dfa.accepts(""), Ok(true));
        assert_eq!(dfa.accepts("a"), Ok(false));
    }

    #[test]
    fn state_limit_is_enforced() {
        init();
        assert_eq!(
            Determinizer::new().state_limit(2).determinize(&diamond()).err(),
            Some(Error::StateLimitExceeded { limit: 2 })
        );
        assert!(Determinizer::new().state_limit(3).determinize(&diamond()).is_ok());
    }

    #[test]
    fn configuration_lookup() {
        let result = Determinizer::new().determinize(&diamond()).unwrap();
        let pair: StateSet = [1, 2].into_iter().collect();
        assert_eq!(result.configuration(1), Some(&pair));
        assert_eq!(result.configuration(3), None);
    }
}
