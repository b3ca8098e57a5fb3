//! Positional base conversion through a big integer.
//!
//! The input is read as one big-endian number and rewritten digit by digit
//! in the target base. Leading zero bytes carry no value, so they are
//! counted and emitted as zero symbols of their own.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::util;
use super::{Codec, FromAlphabet};
use crate::bytes::{DecodedBytes, EncodedBytes};
use crate::error::{LengthConstraint, MultibaseError, Result};
use crate::table::{unique, IndexedTable};
use crate::types::{CodecMeta, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseX {
    table: IndexedTable,
}

impl BaseX {
    pub const SIZE: LengthConstraint = LengthConstraint::Range { min: 3, max: Some(254) };

    pub fn new(alphabet: &str) -> Result<Self> {
        Self::from_alphabet(alphabet, Mode::Lenient)
    }

    pub fn base(&self) -> usize {
        self.table.base()
    }
}

impl FromAlphabet for BaseX {
    fn from_symbols(symbols: &[u8], mode: Mode) -> Result<Self> {
        let ords = unique(symbols.iter().copied());
        if !Self::SIZE.contains(ords.len()) {
            return Err(MultibaseError::invalid_alphabet(Self::SIZE, ords.len()));
        }
        Ok(Self {
            table: IndexedTable::new(&ords, mode, None)?,
        })
    }
}

impl Codec for BaseX {
    fn meta(&self) -> CodecMeta {
        CodecMeta::from_table("basex", &self.table, false)
    }

    fn table(&self) -> Option<&IndexedTable> {
        Some(&self.table)
    }

    fn encode(&self, plain: &[u8]) -> Result<EncodedBytes> {
        let encoding = self.table.alphabet().text_encoding();
        if plain.is_empty() {
            return Ok(EncodedBytes::new(Vec::new(), encoding));
        }

        let zero = self.table.zero();
        let leading_zeros = plain.iter().take_while(|&&b| b == 0).count();
        let base = BigUint::from(self.table.base());
        let mut num = BigUint::from_bytes_be(&plain[leading_zeros..]);

        // Least significant digit first, reversed at the end.
        let mut output = Vec::with_capacity(self.table.encoded_length(plain.len()));
        while !num.is_zero() {
            let (quotient, remainder) = num.div_rem(&base);
            let symbol = remainder
                .to_usize()
                .and_then(|digit| self.table.symbol_at(digit))
                .ok_or_else(|| MultibaseError::invalid_input(format!("digit {} outside alphabet", remainder)))?;
            output.push(symbol);
            num = quotient;
        }

        output.resize(output.len() + self.table.encoded_zeroes_length(leading_zeros), zero);

        if self.table.pad_to_power() {
            let width = self.table.encoded_length(plain.len());
            if output.len() < width {
                output.resize(width, zero);
            }
        }

        output.reverse();
        Ok(EncodedBytes::new(output, encoding))
    }

    fn decode(&self, encoded: &[u8]) -> Result<DecodedBytes> {
        if encoded.is_empty() {
            return Ok(DecodedBytes::default());
        }

        util::ensure_decodable(encoded, &self.table)?;

        let leading_zeros = encoded
            .iter()
            .take_while(|&&symbol| self.table.index(symbol) == Some(0))
            .count();

        let base = BigUint::from(self.table.base());
        let mut num = BigUint::zero();
        for (position, &symbol) in encoded.iter().enumerate().skip(leading_zeros) {
            let digit = self
                .table
                .index(symbol)
                .ok_or_else(|| MultibaseError::invalid_char(symbol, position))?;
            num *= &base;
            num += BigUint::from(digit);
        }

        let value = if num.is_zero() { Vec::new() } else { num.to_bytes_be() };

        let zeroes = if self.table.pad_to_power() {
            self.table.decoded_length(encoded.len()).saturating_sub(value.len())
        } else {
            self.table.decoded_zeroes_length(leading_zeros)
        };

        let mut output = Vec::with_capacity(zeroes + value.len());
        output.resize(zeroes, 0u8);
        output.extend_from_slice(&value);
        Ok(DecodedBytes::new(output))
    }
}
