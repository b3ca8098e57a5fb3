//! Shared plumbing for the RFC 4648 codecs.
//!
//! Encoding engines only ever see the canonical alphabet of a base. Custom
//! alphabets are mapped onto it symbol by symbol before decoding and away
//! from it after encoding.

use crate::bytes::{transcode, DecodedBytes, EncodedBytes};
use crate::error::{LengthConstraint, MultibaseError, Result};
use crate::table::{unique, IndexedTable};

/// RFC 4648 grouping: `bits` per symbol, `chunk_symbols` symbols per chunk.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub bits: usize,
    pub chunk_symbols: usize,
}

impl Layout {
    /// Longest prefix of `len` unpadded symbols that carries whole bytes.
    pub fn whole_bytes(&self, len: usize) -> usize {
        let full = len / self.chunk_symbols * self.chunk_symbols;
        let bytes = (len - full) * self.bits / 8;
        full + (bytes * 8).div_ceil(self.bits)
    }
}

/// Dedups `symbols` and splits off the padder when one extra symbol is present.
pub fn split_padder(symbols: &[u8], base: usize, allow_padder: bool) -> Result<(Vec<u8>, Option<u8>)> {
    let mut ords = unique(symbols.iter().copied());
    let expected = if allow_padder {
        LengthConstraint::Range {
            min: base,
            max: Some(base + 1),
        }
    } else {
        LengthConstraint::Exact(base)
    };

    if !expected.contains(ords.len()) {
        return Err(MultibaseError::invalid_alphabet(expected, ords.len()));
    }

    let padder = ords.get(base).copied();
    ords.truncate(base);
    Ok((ords, padder))
}

pub fn ensure_decodable(encoded: &[u8], table: &IndexedTable) -> Result<()> {
    match encoded.iter().position(|&symbol| !table.accepts(symbol)) {
        Some(position) => Err(MultibaseError::invalid_char(encoded[position], position)),
        None => Ok(()),
    }
}

/// True when `table` emits exactly what `canonical` emits.
pub fn emits_canonical(table: &IndexedTable, canonical: &IndexedTable) -> bool {
    table.symbols() == canonical.symbols() && (table.padder().is_none() || table.padder() == canonical.padder())
}

/// Folds `encoded` onto the casing of `table`, then onto the canonical alphabet.
pub fn to_canonical(encoded: &[u8], table: &IndexedTable, canonical: &IndexedTable) -> Result<Vec<u8>> {
    let mut folded = Vec::with_capacity(encoded.len());
    for (position, &symbol) in encoded.iter().enumerate() {
        // A padder the canonical alphabet has no slot for carries no data.
        if canonical.padder().is_none() && table.padder() == Some(symbol) {
            continue;
        }
        let canonical_case = table
            .canonical_symbol(symbol)
            .ok_or_else(|| MultibaseError::invalid_char(symbol, position))?;
        folded.push(canonical_case);
    }

    transcode(
        &folded,
        &table.alphabet().positional_symbols(),
        &canonical.alphabet().positional_symbols(),
    )
}

/// Moves text produced over the canonical alphabet onto `table`.
pub fn encode_packed(text: String, table: &IndexedTable, canonical: &IndexedTable) -> Result<EncodedBytes> {
    let text = EncodedBytes::new(text.into_bytes(), table.alphabet().text_encoding());

    if emits_canonical(table, canonical) {
        return Ok(text);
    }

    text.transcode(
        &canonical.alphabet().positional_symbols(),
        &table.alphabet().positional_symbols(),
    )
}

/// Folds `encoded` onto the canonical alphabet and hands it to `decode` one
/// padded run at a time. Each chunk ends at its first padder and symbols short
/// of a whole byte are dropped, so `decode` only ever sees unpadded input of a
/// valid length.
pub fn decode_packed(
    encoded: &[u8],
    layout: Layout,
    table: &IndexedTable,
    canonical: &IndexedTable,
    decode: impl Fn(&[u8]) -> Result<Vec<u8>>,
) -> Result<DecodedBytes> {
    if encoded.is_empty() {
        return Ok(DecodedBytes::default());
    }

    ensure_decodable(encoded, table)?;

    let folded;
    let mut rest = if emits_canonical(table, canonical) {
        encoded
    } else {
        folded = to_canonical(encoded, table, canonical)?;
        &folded[..]
    };

    let mut plain = Vec::with_capacity(canonical.decoded_length(rest.len()));
    while !rest.is_empty() {
        let cut = canonical
            .padder()
            .and_then(|padder| rest.iter().position(|&symbol| symbol == padder));
        let (data, next) = match cut {
            Some(cut) => {
                let end = ((cut / layout.chunk_symbols + 1) * layout.chunk_symbols).min(rest.len());
                (&rest[..cut], &rest[end..])
            }
            None => (rest, &rest[rest.len()..]),
        };
        plain.extend(decode(&data[..layout.whole_bytes(data.len())])?);
        rest = next;
    }

    Ok(DecodedBytes::new(plain))
}
