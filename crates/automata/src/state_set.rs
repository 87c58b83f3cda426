use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

use bit_set::BitSet;

/// A set of state indices. Used both as an NFA transition target and as an NFA
/// configuration.
///
/// Equality and hashing only look at the members, never at the allocated
/// capacity, so two sets built in different orders are the same map key.
#[derive(Clone, Default)]
pub struct StateSet {
    bits: BitSet,
}

impl StateSet {
    pub fn new() -> StateSet {
        StateSet { bits: BitSet::new() }
    }

    pub fn singleton(state: usize) -> StateSet {
        let mut set = StateSet::new();
        set.insert(state);
        set
    }

    /// Returns `true` if `state` was not already present.
    pub fn insert(&mut self, state: usize) -> bool {
        self.bits.insert(state)
    }

    pub fn remove(&mut self, state: usize) -> bool {
        self.bits.remove(state)
    }

    pub fn contains(&self, state: usize) -> bool {
        self.bits.contains(state)
    }

    pub fn union_with(&mut self, other: &StateSet) {
        self.bits.union_with(&other.bits);
    }

    pub fn intersects(&self, other: &StateSet) -> bool {
        !self.bits.is_disjoint(&other.bits)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for member in self.iter() {
            member.hash(state);
        }
    }
}

impl FromIterator<usize> for StateSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        StateSet {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<usize> for StateSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.bits.extend(iter);
    }
}

impl Debug for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, state) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", state)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = StateSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 1);
        assert!(set.contains(3));
        assert!(!set.contains(2));
    }

    #[test]
    fn union_and_intersection() {
        let mut a: StateSet = [0, 2].into_iter().collect();
        let b: StateSet = [2, 5].into_iter().collect();
        assert!(a.intersects(&b));
        a.union_with(&b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![0, 2, 5]);
        assert!(!a.intersects(&StateSet::singleton(7)));
        assert!(!StateSet::new().intersects(&a));
    }

    #[test]
    fn equality_ignores_capacity() {
        // grown to hold 100, then shrunk back to the same members
        let mut wide = StateSet::singleton(1);
        wide.insert(100);
        wide.remove(100);
        let narrow = StateSet::singleton(1);
        assert_eq!(wide, narrow);

        let mut keys: HashMap<StateSet, usize> = HashMap::new();
        keys.insert(wide, 0);
        assert_eq!(keys.get(&narrow), Some(&0));
    }

    #[test]
    fn display() {
        let set: StateSet = [4, 0, 1].into_iter().collect();
        assert_eq!(set.to_string(), "{0, 1, 4}");
        assert_eq!(StateSet::new().to_string(), "{}");
    }
}
