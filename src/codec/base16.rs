use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use std::sync::OnceLock;

use super::util::{self, Layout};
use super::{Codec, FromAlphabet};
use crate::bytes::{DecodedBytes, EncodedBytes};
use crate::error::{MultibaseError, Result};
use crate::table::IndexedTable;
use crate::types::{CodecMeta, Mode};

const CANONICAL_ALPHABET: &[u8] = b"0123456789abcdef";
const LAYOUT: Layout = Layout {
    bits: 4,
    chunk_symbols: 2,
};

static CANONICAL: OnceLock<Base16> = OnceLock::new();

/// Hexadecimal. A 17th alphabet symbol is read as a padder: accepted and
/// skipped on decode, never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base16 {
    table: IndexedTable,
}

impl Base16 {
    pub fn new(alphabet: &str) -> Result<Self> {
        Self::from_alphabet(alphabet, Mode::Lenient)
    }

    pub fn canonical() -> &'static Base16 {
        CANONICAL.get_or_init(|| Base16 {
            table: IndexedTable::new(CANONICAL_ALPHABET, Mode::Lenient, None).expect("canonical base16 alphabet"),
        })
    }

    pub fn is_canonical(&self) -> bool {
        self == Self::canonical()
    }
}

impl FromAlphabet for Base16 {
    fn from_symbols(symbols: &[u8], mode: Mode) -> Result<Self> {
        let (ords, padder) = util::split_padder(symbols, 16, true)?;
        Ok(Self {
            table: IndexedTable::new(&ords, mode, padder)?,
        })
    }
}

impl Codec for Base16 {
    fn meta(&self) -> CodecMeta {
        CodecMeta::from_table("base16", &self.table, self.is_canonical())
    }

    fn table(&self) -> Option<&IndexedTable> {
        Some(&self.table)
    }

    fn encode(&self, plain: &[u8]) -> Result<EncodedBytes> {
        util::encode_packed(HEXLOWER.encode(plain), &self.table, &Self::canonical().table)
    }

    fn decode(&self, encoded: &[u8]) -> Result<DecodedBytes> {
        util::decode_packed(encoded, LAYOUT, &self.table, &Self::canonical().table, |hex| {
            HEXLOWER_PERMISSIVE
                .decode(hex)
                .map_err(|e| MultibaseError::invalid_input(e.to_string()))
        })
    }
}
