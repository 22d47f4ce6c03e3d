use std::fmt;

use crate::error::HuffmanError;

/// Number of distinct symbols in the fixed alphabet. The coder stays 7-bit
/// clean: bytes with the high bit set are rejected rather than widening the
/// alphabet.
pub const ALPHABET_SIZE: usize = 128;

/// One element of the 128-value alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub fn new(value: u8) -> Result<Self, HuffmanError> {
        if (value as usize) < ALPHABET_SIZE {
            Ok(Symbol(value))
        } else {
            Err(HuffmanError::SymbolOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Next symbol in alphabet order, wrapping 127 back to 0.
    pub(crate) fn successor(self) -> Symbol {
        Symbol((self.0 + 1) % ALPHABET_SIZE as u8)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = HuffmanError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (self.0 as char).escape_default())
    }
}

/// Validate a byte slice against the alphabet.
pub fn symbols_from_bytes(bytes: &[u8]) -> Result<Vec<Symbol>, HuffmanError> {
    bytes.iter().map(|&byte| Symbol::new(byte)).collect()
}

pub fn bytes_from_symbols(symbols: &[Symbol]) -> Vec<u8> {
    symbols.iter().map(|symbol| symbol.value()).collect()
}

/// A leaf's statistical weight: the fraction of the input one symbol
/// accounts for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub probability: f64,
}

/// Observed character-frequency distribution of one input, sorted ascending
/// by probability with ties broken by symbol value.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    entries: Vec<SymbolFrequency>,
}

impl FrequencyModel {
    /// Scan a symbol sequence and build the sorted frequency list.
    ///
    /// An input with a single distinct symbol gets a synthetic
    /// zero-probability companion leaf at the next alphabet slot, so the
    /// tree always has depth >= 1 and the lone symbol a non-empty code.
    /// Zero input symbols is an error, not a default.
    pub fn scan<I>(symbols: I) -> Result<Self, HuffmanError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut occurrences = [0u64; ALPHABET_SIZE];
        let mut total = 0u64;
        for symbol in symbols {
            occurrences[symbol.index()] += 1;
            total += 1;
        }
        if total == 0 {
            return Err(HuffmanError::EmptyInput);
        }

        let distinct = occurrences.iter().filter(|&&count| count > 0).count();
        let mut entries: Vec<SymbolFrequency> = Vec::with_capacity(distinct.max(2));

        if distinct > 1 {
            for (index, &count) in occurrences.iter().enumerate() {
                if count > 0 {
                    entries.push(SymbolFrequency {
                        symbol: Symbol(index as u8),
                        probability: count as f64 / total as f64,
                    });
                }
            }
        } else {
            // the first (and only) non-zero slot, scanning from 0
            let index = occurrences
                .iter()
                .position(|&count| count > 0)
                .ok_or(HuffmanError::EmptyInput)?;
            let lone = Symbol(index as u8);
            entries.push(SymbolFrequency {
                symbol: lone,
                probability: occurrences[index] as f64 / total as f64,
            });
            entries.push(SymbolFrequency {
                symbol: lone.successor(),
                probability: 0.0,
            });
        }

        entries.sort_by(|a, b| {
            a.probability
                .total_cmp(&b.probability)
                .then(a.symbol.cmp(&b.symbol))
        });

        log::trace!("symbol frequencies: {:?}", entries);

        Ok(FrequencyModel { entries })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HuffmanError> {
        Self::scan(symbols_from_bytes(bytes)?)
    }

    pub fn entries(&self) -> &[SymbolFrequency] {
        &self.entries
    }
}
