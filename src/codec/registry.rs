use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use super::{factory, Base16, Base2, Base32, Base64, BaseX, Codec, Identity};
use crate::error::{MultibaseError, Result};
use crate::table::symbols_from_str;
use crate::types::CodecMeta;

/// Builds a codec from alphabet symbols.
pub type CodecFactory = fn(&[u8]) -> Result<Box<dyn Codec>>;

macro_rules! register_codecs {
    ($($name:literal, $code:literal => $codec:ident($alphabet:literal)),* $(,)?) => {
        fn register_multibase_table(registry: &mut Registry) -> Result<()> {
            $(
                registry.register($name, $code, Some(factory::<$codec> as CodecFactory), $alphabet)?;
            )*
            Ok(())
        }

        #[cfg(test)]
        fn expected_codec_names() -> Vec<&'static str> {
            vec![$($name),*]
        }
    };
}

register_codecs! {
    "base2", b'0' => Base2("01"),
    "base8", b'7' => BaseX("01234567"),
    "base10", b'9' => BaseX("0123456789"),
    "base16", b'f' => Base16("0123456789abcdef"),
    "base16upper", b'F' => Base16("0123456789ABCDEF"),
    "base32", b'b' => Base32("abcdefghijklmnopqrstuvwxyz234567"),
    "base32upper", b'B' => Base32("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"),
    "base32pad", b'c' => Base32("abcdefghijklmnopqrstuvwxyz234567="),
    "base32padupper", b'C' => Base32("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567="),
    "base32hex", b'v' => Base32("0123456789abcdefghijklmnopqrstuv"),
    "base32hexupper", b'V' => Base32("0123456789ABCDEFGHIJKLMNOPQRSTUV"),
    "base32hexpad", b't' => Base32("0123456789abcdefghijklmnopqrstuv="),
    "base32hexpadupper", b'T' => Base32("0123456789ABCDEFGHIJKLMNOPQRSTUV="),
    "base32z", b'h' => Base32("ybndrfg8ejkmcpqxot1uwisza345h769"),
    "base58flickr", b'Z' => BaseX("123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ"),
    "base58btc", b'z' => BaseX("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"),
    "base64", b'm' => Base64("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"),
    "base64pad", b'M' => Base64("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/="),
    "base64url", b'u' => Base64("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"),
    "base64urlpad", b'U' => Base64("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_="),
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// A named codec and its one-byte multibase prefix. The codec is absent for
/// encodings that are reserved in the table but not implemented.
#[derive(Debug)]
pub struct Registration {
    name: String,
    code: u8,
    engine: Option<Box<dyn Codec>>,
}

impl Registration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn engine(&self) -> Option<&dyn Codec> {
        self.engine.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecInfo {
    pub name: String,
    pub code: char,
    pub codec: Option<CodecMeta>,
}

#[derive(Debug)]
pub struct Registry {
    registrations: Vec<Registration>,
    name_map: HashMap<String, usize>,
    code_map: HashMap<u8, usize>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            name_map: HashMap::new(),
            code_map: HashMap::new(),
        }
    }

    /// The multibase 1.0.0 table.
    pub fn standard() -> Self {
        build_standard().unwrap_or_else(|e| panic!("multibase table failed to build: {}", e))
    }

    /// Shared read-only instance of [`Registry::standard`].
    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::standard)
    }

    /// Registers `name` under `code`, building its codec with `factory`
    /// from `alphabet`. Without a factory the entry is reserved only.
    pub fn register(&mut self, name: &str, code: u8, factory: Option<CodecFactory>, alphabet: &str) -> Result<()> {
        self.ensure_vacant(name, code)?;
        let engine = match factory {
            Some(build) => Some(build(&symbols_from_str(alphabet)?)?),
            None => None,
        };
        self.insert(name, code, engine);
        Ok(())
    }

    pub fn register_codec(&mut self, name: &str, code: u8, codec: Box<dyn Codec>) -> Result<()> {
        self.ensure_vacant(name, code)?;
        self.insert(name, code, Some(codec));
        Ok(())
    }

    fn ensure_vacant(&self, name: &str, code: u8) -> Result<()> {
        if self.name_map.contains_key(name) || self.code_map.contains_key(&code) {
            return Err(MultibaseError::duplicate_codec(name));
        }
        Ok(())
    }

    fn insert(&mut self, name: &str, code: u8, engine: Option<Box<dyn Codec>>) {
        let idx = self.registrations.len();
        self.registrations.push(Registration {
            name: name.to_string(),
            code,
            engine,
        });
        self.name_map.insert(name.to_string(), idx);
        self.code_map.insert(code, idx);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Registration> {
        self.name_map.get(name).map(|&idx| &self.registrations[idx])
    }

    pub fn find_by_code(&self, code: u8) -> Option<&Registration> {
        self.code_map.get(&code).map(|&idx| &self.registrations[idx])
    }

    /// Looks `lookup` up as a name, then as a one-symbol prefix, then as a
    /// lowercased name.
    pub fn find(&self, lookup: &str) -> Option<&Registration> {
        self.find_by_name(lookup)
            .or_else(|| single_code(lookup).and_then(|code| self.find_by_code(code)))
            .or_else(|| self.find_by_name(&lookup.to_lowercase()))
    }

    pub fn resolve(&self, lookup: &str) -> Result<&dyn Codec> {
        let registration = self.find(lookup).ok_or_else(|| MultibaseError::unknown_codec(lookup))?;
        registration
            .engine()
            .ok_or_else(|| MultibaseError::no_engine(registration.name()))
    }

    pub fn code(&self, name: &str) -> Result<u8> {
        self.find_by_name(name)
            .map(Registration::code)
            .ok_or_else(|| MultibaseError::unknown_codec(name))
    }

    pub fn name(&self, code: u8) -> Result<&str> {
        self.find_by_code(code)
            .map(Registration::name)
            .ok_or_else(|| MultibaseError::unknown_codec(char::from(code).escape_default().to_string()))
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }

    pub fn list(&self) -> Vec<CodecInfo> {
        self.registrations
            .iter()
            .map(|r| CodecInfo {
                name: r.name.clone(),
                code: char::from(r.code),
                codec: r.engine().map(|c| c.meta()),
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

fn build_standard() -> Result<Registry> {
    let mut registry = Registry::new();
    registry.register_codec("identity", 0x00, Box::new(Identity))?;
    registry.register("base1", b'1', None, "1")?;
    register_multibase_table(&mut registry)?;
    Ok(registry)
}

fn single_code(lookup: &str) -> Option<u8> {
    let mut chars = lookup.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => u8::try_from(u32::from(ch)).ok(),
        _ => None,
    }
}
