use std::fmt::{Debug, Display};
use std::str::FromStr;

use bit_set::BitSet;

use crate::alphabet::{self, Symbol, ALPHABET_SIZE};
use crate::error::InvalidArgument;

/// A set of symbols, at most [`ALPHABET_SIZE`] members.
#[derive(Clone, PartialEq, Eq)]
pub struct SymbolSet {
    bits: BitSet,
}

impl SymbolSet {
    pub fn new() -> SymbolSet {
        SymbolSet {
            bits: BitSet::with_capacity(ALPHABET_SIZE),
        }
    }

    pub fn all() -> SymbolSet {
        SymbolSet {
            bits: (0..ALPHABET_SIZE).collect(),
        }
    }

    pub fn insert(&mut self, symbol: Symbol) -> bool {
        self.bits.insert(symbol.index())
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.bits.contains(symbol.index())
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn complement(&self) -> SymbolSet {
        let mut bits: BitSet = (0..ALPHABET_SIZE).collect();
        bits.difference_with(&self.bits);
        SymbolSet { bits }
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.bits.iter().map(|x| Symbol::new(x as u32).expect("symbol set only holds alphabet codes"))
    }

    // maximal runs of consecutive codes, as inclusive (low, high) pairs
    fn ranges(&self) -> Vec<(Symbol, Symbol)> {
        let mut ranges: Vec<(Symbol, Symbol)> = Vec::new();
        for symbol in self.iter() {
            match ranges.last_mut() {
                Some((_, high)) if high.code() + 1 == symbol.code() => *high = symbol,
                _ => ranges.push((symbol, symbol)),
            }
        }
        ranges
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Every symbol appearing in the string. Repeated symbols are collapsed.
impl FromStr for SymbolSet {
    type Err = InvalidArgument;

    fn from_str(symbols: &str) -> Result<SymbolSet, InvalidArgument> {
        Ok(alphabet::symbols(symbols)?.collect())
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        let mut set = SymbolSet::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl Debug for SymbolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Compact label used for graph edges: `a`, `[a-cx]`, `[^\n]` or `ANY`.
impl Display for SymbolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.len() == ALPHABET_SIZE {
            return write!(f, "ANY");
        }
        if self.len() == 1 {
            let only = self.iter().next().expect("length checked");
            return write!(f, "{}", only);
        }

        let (negated, shown) = if self.len() > ALPHABET_SIZE / 2 {
            (true, self.complement())
        } else {
            (false, self.clone())
        };

        write!(f, "[")?;
        if negated {
            write!(f, "^")?;
        }
        for (low, high) in shown.ranges() {
            write_class_member(f, low)?;
            if low != high {
                write!(f, "-")?;
                write_class_member(f, high)?;
            }
        }
        write!(f, "]")
    }
}

// `^`, `-` and `]` mean something inside brackets; `\` is already escaped by `Symbol`
fn write_class_member(f: &mut std::fmt::Formatter<'_>, symbol: Symbol) -> std::fmt::Result {
    match symbol.code() {
        b'^' | b'-' | b']' => write!(f, "\\{}", char::from(symbol.code())),
        _ => write!(f, "{}", symbol),
    }
}
