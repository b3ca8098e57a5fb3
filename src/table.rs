//! Alphabet tables shared by every codec.
//!
//! Symbols are byte values. An [`AlphabetTable`] knows which symbols it
//! emits and which it accepts; an [`IndexedTable`] adds the digit lookups and
//! length arithmetic the codecs need.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::bytes::{EncodedBytes, TextEncoding};
use crate::error::{LengthConstraint, MultibaseError, Result};
use crate::types::Mode;

/// Converts an alphabet string to symbol bytes. Every char must be at most U+00FF.
pub fn symbols_from_str(alphabet: &str) -> Result<Vec<u8>> {
    alphabet
        .chars()
        .map(|ch| u8::try_from(u32::from(ch)).map_err(|_| MultibaseError::AlphabetOutOfRange { symbol: ch }))
        .collect()
}

pub(crate) fn unique(symbols: impl IntoIterator<Item = u8>) -> Vec<u8> {
    let mut seen = [false; 256];
    symbols
        .into_iter()
        .filter(|&symbol| !std::mem::replace(&mut seen[symbol as usize], true))
        .collect()
}

#[derive(Clone)]
pub struct AlphabetTable {
    ords: Vec<u8>,
    loose_ords: Vec<u8>,
    padder: Option<u8>,
    strict: bool,
    accepted: [bool; 256],
}

impl AlphabetTable {
    pub fn new(symbols: &[u8], mode: Mode, padder: Option<u8>) -> Self {
        let ords = unique(symbols.iter().copied());
        let lower = unique(ords.iter().map(u8::to_ascii_lowercase));
        let upper = unique(ords.iter().map(u8::to_ascii_uppercase));

        // A table may only fold case when some symbol has a distinct other
        // casing and folding never merges two of its symbols.
        let no_case_pairs = upper.iter().all(|symbol| lower.contains(symbol));
        let strict = mode == Mode::Strict || no_case_pairs || ords.len() != lower.len();

        let loose_ords = unique(ords.iter().chain(&lower).chain(&upper).copied());

        let mut accepted = [false; 256];
        for &symbol in if strict { &ords } else { &loose_ords } {
            accepted[symbol as usize] = true;
        }
        if let Some(padder) = padder {
            accepted[padder as usize] = true;
        }

        Self {
            ords,
            loose_ords,
            padder,
            strict,
            accepted,
        }
    }

    pub fn base(&self) -> usize {
        self.ords.len()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.ords
    }

    pub fn padder(&self) -> Option<u8> {
        self.padder
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Symbols accepted on decode, padder last.
    pub fn accepted_symbols(&self, force_strict: bool) -> Vec<u8> {
        let symbols = if self.strict || force_strict {
            &self.ords
        } else {
            &self.loose_ords
        };
        symbols.iter().copied().chain(self.padder).collect()
    }

    pub fn accepts(&self, symbol: u8) -> bool {
        self.accepted[symbol as usize]
    }

    /// Emitted symbols followed by the padder, the order transcoding relies on.
    pub fn positional_symbols(&self) -> Vec<u8> {
        self.ords.iter().copied().chain(self.padder).collect()
    }

    pub fn text_encoding(&self) -> TextEncoding {
        TextEncoding::detect(&self.positional_symbols())
    }

    pub fn to_text(&self) -> String {
        EncodedBytes::from(self.ords.clone()).to_text()
    }
}

impl PartialEq for AlphabetTable {
    fn eq(&self, other: &Self) -> bool {
        self.ords == other.ords && self.padder == other.padder && self.strict == other.strict
    }
}

impl Eq for AlphabetTable {}

impl Hash for AlphabetTable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ords.hash(state);
    }
}

impl fmt::Debug for AlphabetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphabetTable")
            .field("alphabet", &self.to_text())
            .field("padder", &self.padder.map(char::from))
            .field("strict", &self.strict)
            .finish()
    }
}

/// Digit lookups over an [`AlphabetTable`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndexedTable {
    alphabet: AlphabetTable,
    forward: [Option<u8>; 256],
    factor: Factor,
}

/// `log(256) / log(base)`. Power-of-two bases keep the exact bit width so
/// length arithmetic stays in integers.
#[derive(Debug, Clone, Copy)]
enum Factor {
    Bits(usize),
    Ratio(f64),
}

impl PartialEq for Factor {
    fn eq(&self, other: &Self) -> bool {
        self.value().to_bits() == other.value().to_bits()
    }
}

impl Eq for Factor {}

impl Hash for Factor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().to_bits().hash(state);
    }
}

impl Factor {
    fn value(self) -> f64 {
        match self {
            Factor::Bits(bits) => 8.0 / bits as f64,
            Factor::Ratio(ratio) => ratio,
        }
    }
}

impl IndexedTable {
    pub const SIZE: LengthConstraint = LengthConstraint::Range { min: 2, max: Some(256) };

    pub fn new(symbols: &[u8], mode: Mode, padder: Option<u8>) -> Result<Self> {
        Self::from_alphabet(AlphabetTable::new(symbols, mode, padder))
    }

    pub fn from_alphabet(alphabet: AlphabetTable) -> Result<Self> {
        let base = alphabet.base();
        if !Self::SIZE.contains(base) {
            return Err(MultibaseError::invalid_alphabet(Self::SIZE, base));
        }

        let mut forward = [None; 256];
        for (index, &symbol) in alphabet.symbols().iter().enumerate() {
            forward[symbol as usize] = u8::try_from(index).ok();
        }

        let factor = if base.is_power_of_two() {
            Factor::Bits(base.trailing_zeros() as usize)
        } else {
            Factor::Ratio(256f64.ln() / (base as f64).ln())
        };

        Ok(Self {
            alphabet,
            forward,
            factor,
        })
    }

    pub fn alphabet(&self) -> &AlphabetTable {
        &self.alphabet
    }

    pub fn base(&self) -> usize {
        self.alphabet.base()
    }

    pub fn symbols(&self) -> &[u8] {
        self.alphabet.symbols()
    }

    pub fn padder(&self) -> Option<u8> {
        self.alphabet.padder()
    }

    pub fn is_strict(&self) -> bool {
        self.alphabet.is_strict()
    }

    pub fn accepted_symbols(&self, force_strict: bool) -> Vec<u8> {
        self.alphabet.accepted_symbols(force_strict)
    }

    pub fn accepts(&self, symbol: u8) -> bool {
        self.alphabet.accepts(symbol)
    }

    pub fn factor(&self) -> f64 {
        self.factor.value()
    }

    /// The symbol for digit 0, used as leading-zero filler.
    pub fn zero(&self) -> u8 {
        self.alphabet.symbols()[0]
    }

    pub fn index(&self, symbol: u8) -> Option<usize> {
        let lookup = |s: u8| self.forward[s as usize].map(usize::from);
        lookup(symbol).or_else(|| {
            if self.is_strict() {
                None
            } else {
                lookup(symbol.to_ascii_uppercase()).or_else(|| lookup(symbol.to_ascii_lowercase()))
            }
        })
    }

    pub fn symbol_at(&self, index: usize) -> Option<u8> {
        self.alphabet.symbols().get(index).copied()
    }

    /// Folds an accepted symbol onto the casing this table emits.
    pub fn canonical_symbol(&self, symbol: u8) -> Option<u8> {
        if self.padder() == Some(symbol) {
            return Some(symbol);
        }
        if !self.accepts(symbol) {
            return None;
        }
        self.index(symbol).and_then(|index| self.symbol_at(index))
    }

    pub fn pad_to_power(&self) -> bool {
        matches!(self.factor, Factor::Bits(_))
    }

    pub fn encoded_length(&self, plain_len: usize) -> usize {
        match self.factor {
            Factor::Bits(bits) => (plain_len * 8).div_ceil(bits),
            Factor::Ratio(ratio) => (plain_len as f64 * ratio).ceil() as usize,
        }
    }

    pub fn decoded_length(&self, encoded_len: usize) -> usize {
        match self.factor {
            Factor::Bits(bits) => encoded_len * bits / 8,
            Factor::Ratio(ratio) => (encoded_len as f64 / ratio).round() as usize,
        }
    }

    /// Zero symbols standing for `count` leading zero bytes.
    pub fn encoded_zeroes_length(&self, count: usize) -> usize {
        match self.factor {
            Factor::Bits(bits) => count * 8 / bits,
            Factor::Ratio(_) => count,
        }
    }

    /// Zero bytes standing for `count` leading zero symbols.
    pub fn decoded_zeroes_length(&self, count: usize) -> usize {
        match self.factor {
            Factor::Bits(bits) => (count * bits + 4) / 8,
            Factor::Ratio(_) => count,
        }
    }
}

impl fmt::Debug for IndexedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedTable")
            .field("alphabet", &self.alphabet.to_text())
            .field("padder", &self.padder().map(char::from))
            .field("strict", &self.is_strict())
            .finish()
    }
}
