use std::collections::BTreeMap;

use serde::Deserialize;

use crate::alphabet::SpellingAlphabet;
use crate::error::Result;
use crate::languages::CaseFold;

/// The alphabets compiled into the crate.
pub const ALPHABETS_JSON: &str = include_str!("../data/alphabets.json");

/// Serialized form of a set of alphabets.
#[derive(Debug, Deserialize)]
pub struct AlphabetSet {
    /// Locale tag of the fallback alphabet.
    pub default: String,
    pub alphabets: Vec<AlphabetDef>,
}

#[derive(Debug, Deserialize)]
pub struct AlphabetDef {
    pub locale: String,
    #[serde(default)]
    pub names: Vec<String>,
    pub english_name: String,
    pub native_name: String,
    #[serde(default)]
    pub case_fold: CaseFold,
    pub symbols: BTreeMap<String, String>,
}

impl AlphabetDef {
    pub fn build(self) -> Result<SpellingAlphabet> {
        Ok(
            SpellingAlphabet::with_case_fold(&self.locale, self.case_fold, self.symbols)?
                .with_names(self.names)
                .with_display_names(self.english_name, self.native_name),
        )
    }
}

pub fn parse_alphabets(json: &str) -> Result<AlphabetSet> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_builtin() -> Result<AlphabetSet> {
    parse_alphabets(ALPHABETS_JSON)
}
