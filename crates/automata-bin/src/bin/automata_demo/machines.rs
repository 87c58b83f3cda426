use automata::{DFA, FiniteAutomaton, NFA, Result};
use clap::ValueEnum;

/// The automata the demo knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Machine {
    /// DFA accepting exactly "ab"
    OnlyAb,
    /// DFA accepting strings that begin with "ab"
    BeginsAb,
    /// DFA accepting binary strings with an even number of 1s
    EvenOnes,
    /// DFA accepting binary strings with an even number of 0s and of 1s
    EvenZerosOnes,
    /// DFA accepting binary strings with an odd number of 0s and of 1s
    OddZerosOnes,
    /// NFA accepting strings that end in "man"
    EndsMan,
    /// NFA accepting strings that contain "code"
    ContainsCode,
}

/// A built machine, kept as its concrete kind so an NFA can still be determinized.
pub enum Built {
    DFA(DFA),
    NFA(NFA),
}

impl Built {
    pub fn into_automaton(self) -> Box<dyn FiniteAutomaton> {
        match self {
            Built::DFA(dfa) => Box::new(dfa),
            Built::NFA(nfa) => Box::new(nfa),
        }
    }
}

impl Machine {
    pub fn description(self) -> &'static str {
        match self {
            Machine::OnlyAb => "only the string ab",
            Machine::BeginsAb => "begins with ab",
            Machine::EvenOnes => "binary input with an even number of 1s",
            Machine::EvenZerosOnes => "binary input with an even number of 0s and 1s",
            Machine::OddZerosOnes => "binary input with an odd number of 0s and 1s",
            Machine::EndsMan => "strings ending in man",
            Machine::ContainsCode => "strings containing code",
        }
    }

    pub fn build(self) -> Result<Built> {
        let built = match self {
            Machine::OnlyAb => Built::DFA(only_ab()?),
            Machine::BeginsAb => {
                let mut dfa = only_ab()?;
                dfa.set_transition_all(2, 2)?;
                Built::DFA(dfa)
            }
            Machine::EvenOnes => {
                let mut dfa = DFA::new(2)?;
                dfa.set_transition(0, '0', 0)?;
                dfa.set_transition(0, '1', 1)?;
                dfa.set_transition(1, '0', 1)?;
                dfa.set_transition(1, '1', 0)?;
                dfa.set_accepting(0, true)?;
                Built::DFA(dfa)
            }
            Machine::EvenZerosOnes => Built::DFA(zero_one_parity(0)?),
            Machine::OddZerosOnes => Built::DFA(zero_one_parity(2)?),
            Machine::EndsMan => Built::NFA(suffix_or_infix("man", false)?),
            Machine::ContainsCode => Built::NFA(suffix_or_infix("code", true)?),
        };
        Ok(built)
    }
}

fn only_ab() -> Result<DFA> {
    let mut dfa = DFA::new(3)?;
    dfa.set_transition(0, 'a', 1)?;
    dfa.set_transition(1, 'b', 2)?;
    dfa.set_accepting(2, true)?;
    Ok(dfa)
}

// 0 = even/even, 1 = odd 0s, 2 = odd/odd, 3 = odd 1s
fn zero_one_parity(accepting: usize) -> Result<DFA> {
    let mut dfa = DFA::new(4)?;
    for (src, on_zero, on_one) in [(0, 1, 3), (1, 0, 2), (2, 3, 1), (3, 2, 0)] {
        dfa.set_transition(src, '0', on_zero)?;
        dfa.set_transition(src, '1', on_one)?;
    }
    dfa.set_accepting(accepting, true)?;
    Ok(dfa)
}

// loop on state 0, then a chain spelling `word`; `infix` also loops on the last state
fn suffix_or_infix(word: &str, infix: bool) -> Result<NFA> {
    let last = word.len();
    let mut nfa = NFA::new(last + 1)?;
    nfa.add_transition_all(0, 0)?;
    for (i, c) in word.chars().enumerate() {
        nfa.add_transition(i, c, i + 1)?;
    }
    if infix {
        nfa.add_transition_all(last, last)?;
    }
    nfa.set_accepting(last, true)?;
    Ok(nfa)
}
