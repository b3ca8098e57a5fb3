use base64::engine::general_purpose::{self, GeneralPurpose};
use base64::{alphabet, Engine as _};
use std::sync::OnceLock;

use super::util::{self, Layout};
use super::{Codec, FromAlphabet};
use crate::bytes::{DecodedBytes, EncodedBytes};
use crate::error::{MultibaseError, Result};
use crate::table::IndexedTable;
use crate::types::{CodecMeta, Mode};

const STANDARD_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const LAYOUT: Layout = Layout {
    bits: 6,
    chunk_symbols: 4,
};

const TRAILING_BITS: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::NO_PAD.with_decode_allow_trailing_bits(true),
);

static CANONICAL: OnceLock<Base64> = OnceLock::new();
static STANDARD: OnceLock<Base64> = OnceLock::new();
static URL_SAFE: OnceLock<Base64> = OnceLock::new();
static URL_SAFE_PADDED: OnceLock<Base64> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64 {
    table: IndexedTable,
}

impl Base64 {
    pub fn new(alphabet: &str) -> Result<Self> {
        Self::from_alphabet(alphabet, Mode::Lenient)
    }

    fn builtin(symbols: &[u8], padder: Option<u8>) -> Base64 {
        Base64 {
            table: IndexedTable::new(symbols, Mode::Lenient, padder).expect("builtin base64 alphabet"),
        }
    }

    /// Standard RFC 4648 alphabet, padded with `=`.
    pub fn canonical() -> &'static Base64 {
        CANONICAL.get_or_init(|| Self::builtin(STANDARD_ALPHABET, Some(b'=')))
    }

    /// Standard alphabet, unpadded.
    pub fn standard() -> &'static Base64 {
        STANDARD.get_or_init(|| Self::builtin(STANDARD_ALPHABET, None))
    }

    /// URL and filename safe alphabet (`-` and `_`), unpadded.
    pub fn url_safe() -> &'static Base64 {
        URL_SAFE.get_or_init(|| Self::builtin(URL_SAFE_ALPHABET, None))
    }

    pub fn url_safe_padded() -> &'static Base64 {
        URL_SAFE_PADDED.get_or_init(|| Self::builtin(URL_SAFE_ALPHABET, Some(b'=')))
    }

    pub fn is_canonical(&self) -> bool {
        self == Self::canonical()
    }
}

impl FromAlphabet for Base64 {
    fn from_symbols(symbols: &[u8], mode: Mode) -> Result<Self> {
        let (ords, padder) = util::split_padder(symbols, 64, true)?;
        Ok(Self {
            table: IndexedTable::new(&ords, mode, padder)?,
        })
    }
}

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta::from_table("base64", &self.table, self.is_canonical())
    }

    fn table(&self) -> Option<&IndexedTable> {
        Some(&self.table)
    }

    fn encode(&self, plain: &[u8]) -> Result<EncodedBytes> {
        let text = if self.table.padder().is_some() {
            general_purpose::STANDARD.encode(plain)
        } else {
            general_purpose::STANDARD_NO_PAD.encode(plain)
        };
        util::encode_packed(text, &self.table, &Self::canonical().table)
    }

    fn decode(&self, encoded: &[u8]) -> Result<DecodedBytes> {
        util::decode_packed(encoded, LAYOUT, &self.table, &Self::canonical().table, |symbols| {
            TRAILING_BITS
                .decode(symbols)
                .map_err(|e| MultibaseError::invalid_input(e.to_string()))
        })
    }
}
