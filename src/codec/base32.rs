use data_encoding::{Encoding, Specification};
use std::sync::OnceLock;

use super::util::{self, Layout};
use super::{Codec, FromAlphabet};
use crate::bytes::{DecodedBytes, EncodedBytes};
use crate::error::{MultibaseError, Result};
use crate::table::IndexedTable;
use crate::types::{CodecMeta, Mode};

const CANONICAL_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz234567";
const LAYOUT: Layout = Layout {
    bits: 5,
    chunk_symbols: 8,
};

static CANONICAL: OnceLock<Base32> = OnceLock::new();
static PADDED: OnceLock<Encoding> = OnceLock::new();
static UNPADDED: OnceLock<Encoding> = OnceLock::new();

fn make_encoding(padding: bool) -> Encoding {
    let mut spec = Specification::new();
    spec.symbols.push_str(CANONICAL_ALPHABET);
    spec.translate.from.push_str(&CANONICAL_ALPHABET.to_uppercase());
    spec.translate.to.push_str(CANONICAL_ALPHABET);
    spec.check_trailing_bits = false;
    if padding {
        spec.padding = Some('=');
    }
    spec.encoding().unwrap()
}

fn get_padded() -> &'static Encoding {
    PADDED.get_or_init(|| make_encoding(true))
}

fn get_unpadded() -> &'static Encoding {
    UNPADDED.get_or_init(|| make_encoding(false))
}

/// RFC 4648 base32 over any 32 symbols, padded when a 33rd symbol is given.
///
/// ```
/// use multibases::{Base32, Codec};
///
/// let hex = Base32::new("0123456789abcdefghijklmnopqrstuv").unwrap();
/// assert_eq!(hex.encode(b"foobar").unwrap(), "cpnmuoj1e8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base32 {
    table: IndexedTable,
}

impl Base32 {
    pub fn new(alphabet: &str) -> Result<Self> {
        Self::from_alphabet(alphabet, Mode::Lenient)
    }

    /// Lowercase RFC 4648 alphabet, padded with `=`.
    pub fn canonical() -> &'static Base32 {
        CANONICAL.get_or_init(|| Base32 {
            table: IndexedTable::new(CANONICAL_ALPHABET.as_bytes(), Mode::Lenient, Some(b'='))
                .expect("canonical base32 alphabet"),
        })
    }

    pub fn is_canonical(&self) -> bool {
        self == Self::canonical()
    }
}

impl FromAlphabet for Base32 {
    fn from_symbols(symbols: &[u8], mode: Mode) -> Result<Self> {
        let (ords, padder) = util::split_padder(symbols, 32, true)?;
        Ok(Self {
            table: IndexedTable::new(&ords, mode, padder)?,
        })
    }
}

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta::from_table("base32", &self.table, self.is_canonical())
    }

    fn table(&self) -> Option<&IndexedTable> {
        Some(&self.table)
    }

    fn encode(&self, plain: &[u8]) -> Result<EncodedBytes> {
        let engine = if self.table.padder().is_some() {
            get_padded()
        } else {
            get_unpadded()
        };
        util::encode_packed(engine.encode(plain), &self.table, &Self::canonical().table)
    }

    fn decode(&self, encoded: &[u8]) -> Result<DecodedBytes> {
        util::decode_packed(encoded, LAYOUT, &self.table, &Self::canonical().table, |base32| {
            get_unpadded()
                .decode(base32)
                .map_err(|e| MultibaseError::invalid_input(e.to_string()))
        })
    }
}
