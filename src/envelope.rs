//! The multibase envelope: one prefix byte naming the codec, then the payload.

use crate::bytes::{latin1_bytes, DecodedBytes, EncodedBytes};
use crate::codec::{Codec, Registration, Registry};
use crate::error::{MultibaseError, Result};

/// Codec output together with the prefix it travels under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub code: u8,
    pub name: String,
    pub data: EncodedBytes,
}

impl Encoded {
    /// Payload length, prefix excluded.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn pack(&self) -> EncodedBytes {
        pack(self)
    }

    pub fn decode(&self, registry: &Registry) -> Result<DecodedBytes> {
        let (_, codec) = engine(registry, &self.name)?;
        codec.decode(&self.data)
    }
}

fn engine<'r>(registry: &'r Registry, name: &str) -> Result<(&'r Registration, &'r dyn Codec)> {
    let registration = registry
        .find(name)
        .ok_or_else(|| MultibaseError::unknown_codec(name))?;
    let codec = registration
        .engine()
        .ok_or_else(|| MultibaseError::no_engine(registration.name()))?;
    Ok((registration, codec))
}

pub fn encode(registry: &Registry, name: &str, plain: &[u8]) -> Result<Encoded> {
    let (registration, codec) = engine(registry, name)?;
    Ok(Encoded {
        code: registration.code(),
        name: registration.name().to_string(),
        data: codec.encode(plain)?,
    })
}

pub fn pack(encoded: &Encoded) -> EncodedBytes {
    encoded.data.clone().prepend(encoded.code)
}

/// `encode` followed by `pack`.
pub fn pack_with(registry: &Registry, name: &str, plain: &[u8]) -> Result<EncodedBytes> {
    encode(registry, name, plain).map(|encoded| pack(&encoded))
}

/// Splits `packed` into its prefix and payload. The payload is not checked
/// against the codec.
pub fn unpack(registry: &Registry, packed: &[u8]) -> Result<Encoded> {
    let (&code, payload) = packed
        .split_first()
        .ok_or_else(|| MultibaseError::invalid_input("empty multibase input"))?;
    Ok(Encoded {
        code,
        name: registry.name(code)?.to_string(),
        data: EncodedBytes::from(payload.to_vec()),
    })
}

pub fn decode(registry: &Registry, packed: &[u8]) -> Result<DecodedBytes> {
    unpack(registry, packed)?.decode(registry)
}

pub fn decode_text(registry: &Registry, packed: &str) -> Result<DecodedBytes> {
    decode(registry, &latin1_bytes(packed)?)
}

/// Prefixes already-encoded `data` with the code registered for `name`.
pub fn decorate(registry: &Registry, data: &[u8], name: &str) -> Result<EncodedBytes> {
    let code = registry.code(name)?;
    Ok(EncodedBytes::from(data.to_vec()).prepend(code))
}
