mod base16;
mod base2;
mod base32;
mod base64;
mod basex;
mod identity;
pub mod registry;
pub(crate) mod util;

pub use base16::Base16;
pub use base2::Base2;
pub use base32::Base32;
pub use base64::Base64;
pub use basex::BaseX;
pub use identity::Identity;
pub use registry::{CodecFactory, CodecInfo, Registration, Registry};

use std::fmt;

use crate::bytes::{latin1_bytes, DecodedBytes, EncodedBytes};
use crate::error::Result;
use crate::table::{symbols_from_str, IndexedTable};
use crate::types::{CodecMeta, Mode};

pub trait Codec: Send + Sync + fmt::Debug {
    fn meta(&self) -> CodecMeta;
    fn table(&self) -> Option<&IndexedTable>;
    fn encode(&self, plain: &[u8]) -> Result<EncodedBytes>;
    fn decode(&self, encoded: &[u8]) -> Result<DecodedBytes>;

    /// Decodes text whose chars are the symbol byte values.
    fn decode_text(&self, text: &str) -> Result<DecodedBytes> {
        self.decode(&latin1_bytes(text)?)
    }

    fn validate(&self, encoded: &[u8]) -> Result<()> {
        match self.table() {
            Some(table) => util::ensure_decodable(encoded, table),
            None => Ok(()),
        }
    }
}

/// Codecs that are built from an alphabet.
pub trait FromAlphabet: Codec + Sized + 'static {
    fn from_symbols(symbols: &[u8], mode: Mode) -> Result<Self>;

    fn from_alphabet(alphabet: &str, mode: Mode) -> Result<Self> {
        Self::from_symbols(&symbols_from_str(alphabet)?, mode)
    }
}

/// Builds a lenient `C` from `symbols`; usable as a [`CodecFactory`].
pub fn factory<C: FromAlphabet>(symbols: &[u8]) -> Result<Box<dyn Codec>> {
    Ok(Box::new(C::from_symbols(symbols, Mode::Lenient)?))
}
