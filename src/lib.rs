//! Self-describing base encodings.
//!
//! A multibase string is one prefix symbol naming the encoding followed by
//! the encoded payload:
//!
//! ```
//! use multibases::{envelope, Registry};
//!
//! let registry = Registry::standard();
//! let packed = envelope::pack_with(&registry, "base58btc", b"hello world").unwrap();
//! assert_eq!(packed.to_text(), "zStV1DL6CwTryKyV");
//! assert_eq!(envelope::decode(&registry, &packed).unwrap(), "hello world");
//! ```

pub mod bytes;
pub mod codec;
pub mod envelope;
pub mod error;
pub mod table;
pub mod types;

pub use bytes::{DecodedBytes, EncodedBytes, TextEncoding};
pub use codec::{
    factory, Base16, Base2, Base32, Base64, BaseX, Codec, CodecFactory, CodecInfo, FromAlphabet, Identity,
    Registration, Registry,
};
pub use envelope::Encoded;
pub use error::{ErrorKind, LengthConstraint, MultibaseError, Result};
pub use table::{AlphabetTable, IndexedTable};
pub use types::{CaseSensitivity, CodecMeta, Mode, PaddingRule};

/// Version of the multibase table [`Registry::standard`] implements.
pub const MULTIBASE_VERSION: &str = "1.0.0";
