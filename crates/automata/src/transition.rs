use std::fmt::Debug;

use crate::alphabet::{Symbol, ALPHABET_SIZE};
use crate::state_set::StateSet;
use crate::symbol_set::SymbolSet;

/// What a transition row stores per symbol.
pub(crate) trait Slot: Clone + Default {
    /// Records `dst` as a destination. Deterministic slots overwrite,
    /// nondeterministic slots accumulate.
    fn assign(&mut self, dst: usize);

    fn is_empty(&self) -> bool;
}

impl Slot for Option<usize> {
    fn assign(&mut self, dst: usize) {
        *self = Some(dst);
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

impl Slot for StateSet {
    fn assign(&mut self, dst: usize) {
        self.insert(dst);
    }

    fn is_empty(&self) -> bool {
        StateSet::is_empty(self)
    }
}

/// Outgoing transitions of one state, one slot per symbol of the alphabet.
#[derive(Clone)]
pub(crate) struct TransitionRow<S: Slot> {
    slots: [S; ALPHABET_SIZE],
}

impl<S: Slot> TransitionRow<S> {
    pub(crate) fn new() -> TransitionRow<S> {
        TransitionRow {
            slots: std::array::from_fn(|_| S::default()),
        }
    }

    pub(crate) fn get(&self, symbol: Symbol) -> &S {
        &self.slots[symbol.index()]
    }

    pub(crate) fn set(&mut self, symbol: Symbol, dst: usize) {
        self.slots[symbol.index()].assign(dst);
    }

    pub(crate) fn set_symbols(&mut self, symbols: &SymbolSet, dst: usize) {
        for symbol in symbols.iter() {
            self.set(symbol, dst);
        }
    }

    pub(crate) fn set_all(&mut self, dst: usize) {
        for slot in self.slots.iter_mut() {
            slot.assign(dst);
        }
    }

    /// Only the slots outside `exceptions` are written; excluded slots keep
    /// whatever they held before.
    pub(crate) fn set_except(&mut self, exceptions: &SymbolSet, dst: usize) {
        self.set_symbols(&exceptions.complement(), dst);
    }

    /// Non-empty slots in ascending symbol order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Symbol, &S)> + '_ {
        Symbol::all()
            .zip(self.slots.iter())
            .filter(|(_, slot)| !slot.is_empty())
    }
}

impl<S: Slot + Debug> Debug for TransitionRow<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Symbol {
        Symbol::new(c as u32).unwrap()
    }

    #[test]
    fn deterministic_slots_overwrite() {
        let mut row: TransitionRow<Option<usize>> = TransitionRow::new();
        row.set(sym('a'), 1);
        row.set(sym('a'), 2);
        assert_eq!(*row.get(sym('a')), Some(2));
        assert_eq!(*row.get(sym('b')), None);
    }

    #[test]
    fn nondeterministic_slots_accumulate() {
        let mut row: TransitionRow<StateSet> = TransitionRow::new();
        row.set(sym('a'), 1);
        row.set(sym('a'), 2);
        row.set(sym('a'), 2);
        assert_eq!(row.get(sym('a')).iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn set_except_leaves_excluded_slots_alone() {
        let mut row: TransitionRow<Option<usize>> = TransitionRow::new();
        row.set(sym('x'), 7);
        row.set_except(&"xy".parse::<SymbolSet>().unwrap(), 3);

        assert_eq!(*row.get(sym('x')), Some(7));
        assert_eq!(*row.get(sym('y')), None);
        assert_eq!(*row.get(sym('a')), Some(3));
        assert_eq!(row.iter().count(), ALPHABET_SIZE - 1);
    }

    #[test]
    fn set_all_fills_every_slot() {
        let mut row: TransitionRow<StateSet> = TransitionRow::new();
        row.set_all(0);
        assert_eq!(row.iter().count(), ALPHABET_SIZE);
        assert!(row.iter().all(|(_, slot)| slot.contains(0)));
    }
}
