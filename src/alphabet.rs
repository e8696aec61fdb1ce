use std::collections::BTreeMap;

use icu_locid::LanguageIdentifier;
use tracing::trace;

use crate::error::{Result, SpellError};
use crate::languages::{CaseFold, CaseRules};
use crate::locale;
use crate::token::SpelledToken;

/// A word-spelling alphabet.
///
/// A set of words used to pronounce the letters of an alphabet in oral
/// communication. Keys are stored lower case (under the alphabet's case
/// rules) and may span several characters, like `ch` or `sch`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellingAlphabet {
    /// BCP 47 tag of the language this alphabet is used for.
    locale: LanguageIdentifier,
    /// Organisations or standards defining or using this alphabet.
    names: Vec<String>,
    english_name: String,
    native_name: String,
    symbols: BTreeMap<String, String>,
    case_fold: CaseFold,
    /// Longest key, in characters.
    max_key_len: usize,
}

impl SpellingAlphabet {
    /// Builds an alphabet with generic case rules.
    pub fn new<I, K, V>(locale: &str, symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_case_fold(locale, CaseFold::default(), symbols)
    }

    /// Builds an alphabet whose keys are folded with `case_fold`.
    pub fn with_case_fold<I, K, V>(locale: &str, case_fold: CaseFold, symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let lang = locale::parse_tag(locale).map_err(|e| SpellError::Locale {
            locale: locale.to_string(),
            reason: e.to_string(),
        })?;

        let symbols: BTreeMap<String, String> = symbols
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if symbols.is_empty() {
            return Err(SpellError::EmptyAlphabet {
                locale: locale.to_string(),
            });
        }

        let rules = case_fold.rules();
        let mut max_key_len = 0;
        for key in symbols.keys() {
            if key.is_empty() {
                return Err(SpellError::EmptyKey {
                    locale: locale.to_string(),
                });
            }
            let folded = rules.to_lower(key);
            if folded != *key {
                return Err(SpellError::UnfoldedKey {
                    locale: locale.to_string(),
                    key: key.clone(),
                    folded,
                });
            }
            max_key_len = max_key_len.max(key.chars().count());
        }

        let tag = lang.to_string();
        Ok(Self {
            locale: lang,
            names: Vec::new(),
            english_name: tag.clone(),
            native_name: tag,
            symbols,
            case_fold,
            max_key_len,
        })
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the language name in English and in the language itself.
    pub fn with_display_names(
        mut self,
        english: impl Into<String>,
        native: impl Into<String>,
    ) -> Self {
        self.english_name = english.into();
        self.native_name = native.into();
        self
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// BCP 47 tag describing where this alphabet is used, e.g. `de-AT`.
    pub fn lang_tag(&self) -> String {
        self.locale.to_string()
    }

    /// Names of organisations or standards defining or using this alphabet.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    /// The language name, written in that language.
    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    pub fn case_fold(&self) -> CaseFold {
        self.case_fold
    }

    pub fn rules(&self) -> &'static dyn CaseRules {
        self.case_fold.rules()
    }

    /// All keys and their phrases, ordered by key.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Looks up a single token in any casing.
    pub fn phrase_for(&self, token: &str) -> Option<&str> {
        self.symbols.get(&self.rules().to_lower(token)).map(String::as_str)
    }

    /// Generates the text to speak for spelling `text`.
    ///
    /// Phrases are joined with single spaces. Characters without a table
    /// entry are spoken literally, in single quotes.
    pub fn spell(&self, text: &str) -> String {
        self.spell_tokens(text)
            .into_iter()
            .map(|tk| tk.phrase)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Splits `text` into spelled tokens, longest key first.
    ///
    /// At every position the window is the rest of the input cut to the
    /// longest key. The window shrinks one character at a time until its
    /// folded form is a key; a single unknown character becomes an
    /// unmatched token. Every step consumes at least one character.
    pub fn spell_tokens(&self, text: &str) -> Vec<SpelledToken> {
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let units = bounds.len() - 1;
        let rules = self.rules();

        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < units {
            let window = (units - pos).min(self.max_key_len);
            let start = bounds[pos];

            let mut step = None;
            for len in (1..=window).rev() {
                let candidate = &text[start..bounds[pos + len]];
                if let Some(phrase) = self.symbols.get(&rules.to_lower(candidate)) {
                    step = Some((len, SpelledToken::matched(candidate, phrase)));
                    break;
                }
            }

            let (len, token) = step.unwrap_or_else(|| {
                let unit = &text[start..bounds[pos + 1]];
                trace!(unit, locale = %self.locale, "no symbol, quoting literally");
                (1, SpelledToken::unmatched(unit))
            });
            tokens.push(token);
            pos += len;
        }
        tokens
    }
}
