use thiserror::Error;

use crate::bytes::TextEncoding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAlphabet,
    InvalidInput,
    UnknownCodec,
    Registration,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    Exact(usize),
    Range { min: usize, max: Option<usize> },
}

impl LengthConstraint {
    pub fn contains(&self, len: usize) -> bool {
        match self {
            LengthConstraint::Exact(n) => len == *n,
            LengthConstraint::Range { min, max: Some(max) } => (*min..=*max).contains(&len),
            LengthConstraint::Range { min, max: None } => len >= *min,
        }
    }
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::Exact(n) => write!(f, "exactly {}", n),
            LengthConstraint::Range { min, max: Some(max) } => write!(f, "between {} and {}", min, max),
            LengthConstraint::Range { min, max: None } => write!(f, "at least {}", min),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultibaseError {
    #[error("invalid alphabet: expected {expected} symbols, got {actual}")]
    InvalidAlphabet {
        expected: LengthConstraint,
        actual: usize,
    },

    #[error("alphabet symbol '{symbol}' is outside the 0-255 range")]
    AlphabetOutOfRange { symbol: char },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("unknown codec: {name}")]
    UnknownCodec { name: String },

    #[error("no engine registered to encode or decode {name}")]
    NoEngine { name: String },

    #[error("codec already registered: {name}")]
    DuplicateCodec { name: String },

    #[error("cannot convert bytes to text without a text encoding")]
    MissingEncoding,

    #[error("bytes are not valid {encoding:?} text")]
    InvalidText { encoding: TextEncoding },
}

impl MultibaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MultibaseError::InvalidAlphabet { .. } | MultibaseError::AlphabetOutOfRange { .. } => {
                ErrorKind::InvalidAlphabet
            }
            MultibaseError::InvalidInput { .. } | MultibaseError::InvalidCharacter { .. } => {
                ErrorKind::InvalidInput
            }
            MultibaseError::UnknownCodec { .. } | MultibaseError::NoEngine { .. } => ErrorKind::UnknownCodec,
            MultibaseError::DuplicateCodec { .. } => ErrorKind::Registration,
            MultibaseError::MissingEncoding | MultibaseError::InvalidText { .. } => ErrorKind::Text,
        }
    }

    // Helper constructors for common error patterns
    pub fn invalid_alphabet(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidAlphabet { expected, actual }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Symbols are byte values, reported as the Latin-1 char of the same value.
    pub fn invalid_char(symbol: u8, position: usize) -> Self {
        Self::InvalidCharacter {
            char: char::from(symbol),
            position,
        }
    }

    pub fn unknown_codec(name: impl Into<String>) -> Self {
        Self::UnknownCodec { name: name.into() }
    }

    pub fn no_engine(name: impl Into<String>) -> Self {
        Self::NoEngine { name: name.into() }
    }

    pub fn duplicate_codec(name: impl Into<String>) -> Self {
        Self::DuplicateCodec { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, MultibaseError>;
