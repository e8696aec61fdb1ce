use serde::{Deserialize, Serialize};

/// Language specific upper/lower case mappings.
///
/// Keys of a symbol table are stored in the form produced by `to_lower`, and
/// every lookup folds the candidate text with the same rules first.
pub trait CaseRules: Send + Sync {
    fn to_lower(&self, text: &str) -> String;
    fn to_upper(&self, text: &str) -> String;
}

pub mod generic;
pub mod turkish;

pub use generic::Generic;
pub use turkish::Turkish;

/// Selects the case rules of an alphabet. Named in the alphabet data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFold {
    #[default]
    Generic,
    /// Dotted and dotless I are distinct letters (Turkish, Azerbaijani).
    Turkic,
}

impl CaseFold {
    pub fn rules(&self) -> &'static dyn CaseRules {
        match self {
            CaseFold::Generic => &Generic,
            CaseFold::Turkic => &Turkish,
        }
    }
}

/// Upper-cases the first character of `text` and keeps the rest.
pub fn title_case(rules: &dyn CaseRules, text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut buf = [0u8; 4];
            rules.to_upper(first.encode_utf8(&mut buf)) + chars.as_str()
        }
    }
}
