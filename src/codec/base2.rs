use std::sync::OnceLock;

use super::util::{self, Layout};
use super::{Codec, FromAlphabet};
use crate::bytes::{DecodedBytes, EncodedBytes};
use crate::error::{MultibaseError, Result};
use crate::table::IndexedTable;
use crate::types::{CodecMeta, Mode};

const CANONICAL_ALPHABET: &[u8] = b"01";
const LAYOUT: Layout = Layout {
    bits: 1,
    chunk_symbols: 8,
};

static CANONICAL: OnceLock<Base2> = OnceLock::new();

fn decode_binary(canonical: &[u8]) -> Result<Vec<u8>> {
    canonical
        .chunks(8)
        .map(|chunk| {
            let s = std::str::from_utf8(chunk).map_err(|_| MultibaseError::invalid_input("invalid UTF-8"))?;
            u8::from_str_radix(s, 2).map_err(|e| MultibaseError::invalid_input(format!("invalid binary digit: {}", e)))
        })
        .collect()
}

/// Most significant bit first, one symbol per bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base2 {
    table: IndexedTable,
}

impl Base2 {
    pub fn new(alphabet: &str) -> Result<Self> {
        Self::from_alphabet(alphabet, Mode::Lenient)
    }

    pub fn canonical() -> &'static Base2 {
        CANONICAL.get_or_init(|| Base2 {
            table: IndexedTable::new(CANONICAL_ALPHABET, Mode::Lenient, None).expect("canonical base2 alphabet"),
        })
    }

    pub fn is_canonical(&self) -> bool {
        self == Self::canonical()
    }
}

impl FromAlphabet for Base2 {
    fn from_symbols(symbols: &[u8], mode: Mode) -> Result<Self> {
        let (ords, padder) = util::split_padder(symbols, 2, false)?;
        Ok(Self {
            table: IndexedTable::new(&ords, mode, padder)?,
        })
    }
}

impl Codec for Base2 {
    fn meta(&self) -> CodecMeta {
        CodecMeta::from_table("base2", &self.table, self.is_canonical())
    }

    fn table(&self) -> Option<&IndexedTable> {
        Some(&self.table)
    }

    fn encode(&self, plain: &[u8]) -> Result<EncodedBytes> {
        let text = plain.iter().map(|byte| format!("{:08b}", byte)).collect::<String>();
        util::encode_packed(text, &self.table, &Self::canonical().table)
    }

    fn decode(&self, encoded: &[u8]) -> Result<DecodedBytes> {
        util::decode_packed(encoded, LAYOUT, &self.table, &Self::canonical().table, decode_binary)
    }
}
