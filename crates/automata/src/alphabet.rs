use std::fmt::{Debug, Display};

use crate::error::InvalidArgument;

/// Number of symbols every automaton is defined over (7-bit codes).
pub const ALPHABET_SIZE: usize = 128;

/// One of the 128 input symbols. Only codes below [`ALPHABET_SIZE`] can be constructed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub fn new(code: u32) -> Result<Symbol, InvalidArgument> {
        if (code as usize) < ALPHABET_SIZE {
            Ok(Symbol(code as u8))
        } else {
            Err(InvalidArgument::SymbolOutOfRange(code))
        }
    }

    pub fn code(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Every symbol of the alphabet in ascending code order.
    pub fn all() -> SymbolIterator {
        SymbolIterator::new()
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.0).escape_default())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Anything a transition setter accepts as a symbol.
pub trait IntoSymbol {
    fn into_symbol(self) -> Result<Symbol, InvalidArgument>;
}

impl IntoSymbol for Symbol {
    fn into_symbol(self) -> Result<Symbol, InvalidArgument> {
        Ok(self)
    }
}

impl IntoSymbol for char {
    fn into_symbol(self) -> Result<Symbol, InvalidArgument> {
        Symbol::new(self as u32)
    }
}

impl IntoSymbol for u8 {
    fn into_symbol(self) -> Result<Symbol, InvalidArgument> {
        Symbol::new(self as u32)
    }
}

impl IntoSymbol for u32 {
    fn into_symbol(self) -> Result<Symbol, InvalidArgument> {
        Symbol::new(self)
    }
}

/// Checks that all of `input` lies inside the alphabet and yields its symbols.
/// The first character outside the alphabet is reported.
pub(crate) fn symbols(input: &str) -> Result<impl Iterator<Item = Symbol> + '_, InvalidArgument> {
    if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
        return Err(InvalidArgument::SymbolOutOfRange(c as u32));
    }

    Ok(input.bytes().map(Symbol))
}

pub struct SymbolIterator {
    state: u8,
}

impl SymbolIterator {
    pub fn new() -> SymbolIterator {
        SymbolIterator { state: 0 }
    }
}

impl Default for SymbolIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SymbolIterator {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state as usize >= ALPHABET_SIZE {
            return None;
        }

        let next = Symbol(self.state);
        self.state += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ALPHABET_SIZE - self.state as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SymbolIterator {}
