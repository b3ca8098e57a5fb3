use serde::Serialize;

use crate::table::IndexedTable;

/// Strictness requested when building a table.
///
/// `Lenient` lets the table decide: it still ends up strict when its
/// alphabet has no case pairs or when folding case would merge symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    Strict,
    #[default]
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaddingRule {
    None,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecMeta {
    pub kind: &'static str,
    pub base: usize,
    pub alphabet: String,
    pub padder: Option<char>,
    pub padding: PaddingRule,
    pub case_sensitivity: CaseSensitivity,
    pub canonical: bool,
}

impl CodecMeta {
    pub fn from_table(kind: &'static str, table: &IndexedTable, canonical: bool) -> Self {
        CodecMeta {
            kind,
            base: table.base(),
            alphabet: table.alphabet().to_text(),
            padder: table.padder().map(char::from),
            padding: if table.padder().is_some() {
                PaddingRule::Required
            } else {
                PaddingRule::None
            },
            case_sensitivity: if table.is_strict() {
                CaseSensitivity::Sensitive
            } else {
                CaseSensitivity::Insensitive
            },
            canonical,
        }
    }
}
