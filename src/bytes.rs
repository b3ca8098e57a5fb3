//! Byte sequences flowing in and out of codecs.
//!
//! [`EncodedBytes`] holds the symbols a codec emitted, [`DecodedBytes`] the
//! plain bytes it recovered. Both are plain `Vec<u8>` underneath; they only
//! differ in how they turn into a `String`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use serde::Serialize;

use crate::error::{MultibaseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TextEncoding {
    #[default]
    Ascii,
    Latin1,
    Utf8,
}

impl TextEncoding {
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Ascii if !bytes.is_ascii() => Err(MultibaseError::InvalidText { encoding: self }),
            TextEncoding::Ascii | TextEncoding::Latin1 => Ok(latin1_text(bytes)),
            TextEncoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| MultibaseError::InvalidText { encoding: self })
            }
        }
    }

    /// The narrowest encoding able to represent every byte in `bytes`.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.is_ascii() {
            TextEncoding::Ascii
        } else {
            TextEncoding::Latin1
        }
    }
}

fn latin1_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Maps each char to the byte of the same value, as symbols are stored.
pub fn latin1_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| MultibaseError::InvalidCharacter { char: ch, position })
        })
        .collect()
}

/// Replaces every byte by the element of `to` found at the byte's position in `from`.
pub fn transcode(bytes: &[u8], from: &[u8], to: &[u8]) -> Result<Vec<u8>> {
    let mut positions = [None; 256];
    for (index, &symbol) in from.iter().enumerate() {
        positions[symbol as usize].get_or_insert(index);
    }

    bytes
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            positions[byte as usize]
                .and_then(|index| to.get(index).copied())
                .ok_or_else(|| MultibaseError::invalid_char(byte, position))
        })
        .collect()
}

macro_rules! impl_byte_sequence {
    ($name:ident) => {
        impl $name {
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }

            pub fn into_vec(self) -> Vec<u8> {
                self.bytes
            }

            pub fn transcode(&self, from: &[u8], to: &[u8]) -> Result<Self> {
                Ok(Self {
                    bytes: transcode(&self.bytes, from, to)?,
                    encoding: self.encoding,
                })
            }
        }

        impl Deref for $name {
            type Target = [u8];

            fn deref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl From<$name> for Vec<u8> {
            fn from(sequence: $name) -> Vec<u8> {
                sequence.bytes
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.bytes.hash(state);
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.bytes == other.bytes
            }
        }

        impl Eq for $name {}

        impl PartialEq<[u8]> for $name {
            fn eq(&self, other: &[u8]) -> bool {
                self.bytes == other
            }
        }

        impl PartialEq<&[u8]> for $name {
            fn eq(&self, other: &&[u8]) -> bool {
                self.bytes == *other
            }
        }

        impl<const N: usize> PartialEq<&[u8; N]> for $name {
            fn eq(&self, other: &&[u8; N]) -> bool {
                self.bytes == other[..]
            }
        }

        impl PartialEq<Vec<u8>> for $name {
            fn eq(&self, other: &Vec<u8>) -> bool {
                &self.bytes == other
            }
        }
    };
}

/// Symbols produced by a codec. Always representable as text.
#[derive(Debug, Clone, Default)]
pub struct EncodedBytes {
    bytes: Vec<u8>,
    encoding: TextEncoding,
}

impl EncodedBytes {
    pub fn new(bytes: Vec<u8>, encoding: TextEncoding) -> Self {
        Self { bytes, encoding }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn to_text(&self) -> String {
        latin1_text(&self.bytes)
    }

    pub(crate) fn prepend(mut self, symbol: u8) -> Self {
        self.bytes.insert(0, symbol);
        if !symbol.is_ascii() {
            self.encoding = TextEncoding::Latin1;
        }
        self
    }
}

impl From<Vec<u8>> for EncodedBytes {
    fn from(bytes: Vec<u8>) -> Self {
        let encoding = TextEncoding::detect(&bytes);
        Self { bytes, encoding }
    }
}

impl fmt::Display for EncodedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl PartialEq<&str> for EncodedBytes {
    fn eq(&self, other: &&str) -> bool {
        self.bytes.len() == other.chars().count()
            && other.chars().map(u32::from).eq(self.bytes.iter().map(|&b| u32::from(b)))
    }
}

impl PartialEq<DecodedBytes> for EncodedBytes {
    fn eq(&self, other: &DecodedBytes) -> bool {
        self.bytes == other.bytes
    }
}

impl_byte_sequence!(EncodedBytes);

/// Plain bytes recovered by a codec. Turning them into text needs an encoding.
#[derive(Debug, Clone, Default)]
pub struct DecodedBytes {
    bytes: Vec<u8>,
    encoding: Option<TextEncoding>,
}

impl DecodedBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, encoding: None }
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn encoding(&self) -> Option<TextEncoding> {
        self.encoding
    }

    pub fn to_text(&self) -> Result<String> {
        self.encoding
            .ok_or(MultibaseError::MissingEncoding)
            .and_then(|encoding| encoding.decode(&self.bytes))
    }

    pub fn to_text_with(&self, encoding: TextEncoding) -> Result<String> {
        encoding.decode(&self.bytes)
    }
}

impl From<Vec<u8>> for DecodedBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl PartialEq<&str> for DecodedBytes {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<EncodedBytes> for DecodedBytes {
    fn eq(&self, other: &EncodedBytes) -> bool {
        self.bytes == other.bytes
    }
}

impl_byte_sequence!(DecodedBytes);
