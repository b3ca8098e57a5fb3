use super::Codec;
use crate::bytes::{DecodedBytes, EncodedBytes, TextEncoding};
use crate::error::Result;
use crate::table::IndexedTable;
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule};

/// Passes bytes through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Codec for Identity {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            kind: "identity",
            base: 256,
            alphabet: String::new(),
            padder: None,
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Sensitive,
            canonical: true,
        }
    }

    fn table(&self) -> Option<&IndexedTable> {
        None
    }

    fn encode(&self, plain: &[u8]) -> Result<EncodedBytes> {
        Ok(EncodedBytes::new(plain.to_vec(), TextEncoding::Latin1))
    }

    fn decode(&self, encoded: &[u8]) -> Result<DecodedBytes> {
        Ok(DecodedBytes::new(encoded.to_vec()))
    }
}
