use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::debug;

use crate::alphabet::SpellingAlphabet;
use crate::data::{self, AlphabetSet};
use crate::error::{Result, SpellError};
use crate::exactness::Exactness;
use crate::locale::{self, LanguageMatcher};

/// All known spelling alphabets, immutable once built.
pub struct Registry {
    alphabets: Vec<SpellingAlphabet>,
    default: usize,
    matcher: LanguageMatcher,
}

static BUILTIN: LazyLock<Registry> =
    LazyLock::new(|| Registry::builtin().expect("compiled-in alphabet data is invalid"));

/// The registry of compiled-in alphabets, built on first use.
pub fn registry() -> &'static Registry {
    &BUILTIN
}

impl Registry {
    pub fn builtin() -> Result<Self> {
        Self::from_set(data::load_builtin()?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_set(data::parse_alphabets(json)?)
    }

    pub fn from_set(set: AlphabetSet) -> Result<Self> {
        let alphabets = set
            .alphabets
            .into_iter()
            .map(|def| def.build())
            .collect::<Result<Vec<_>>>()?;
        Self::new(alphabets, &set.default)
    }

    /// Builds a registry; `default_tag` names the fallback alphabet's locale.
    pub fn new(alphabets: Vec<SpellingAlphabet>, default_tag: &str) -> Result<Self> {
        if alphabets.is_empty() {
            return Err(SpellError::EmptyRegistry);
        }

        let default_id = locale::parse_tag(default_tag)
            .map_err(|_| SpellError::MissingDefault(default_tag.to_string()))?;
        let default = alphabets
            .iter()
            .position(|a| *a.locale() == default_id)
            .ok_or_else(|| SpellError::MissingDefault(default_tag.to_string()))?;

        let mut seen = HashSet::new();
        for name in alphabets.iter().flat_map(|a| a.names()) {
            if !seen.insert(name.as_str()) {
                return Err(SpellError::DuplicateName(name.clone()));
            }
        }

        let matcher = LanguageMatcher::new(alphabets.iter().map(|a| a.locale().clone()));
        debug!(count = alphabets.len(), default = default_tag, "loaded spelling alphabets");

        Ok(Self {
            alphabets,
            default,
            matcher,
        })
    }

    /// All alphabets, in definition order.
    pub fn alphabets(&self) -> &[SpellingAlphabet] {
        &self.alphabets
    }

    /// All alphabets ordered by language tag, for listings.
    pub fn sorted_by_tag(&self) -> Vec<&SpellingAlphabet> {
        let mut sorted: Vec<_> = self.alphabets.iter().collect();
        sorted.sort_by_cached_key(|a| a.lang_tag());
        sorted
    }

    pub fn default_alphabet(&self) -> &SpellingAlphabet {
        &self.alphabets[self.default]
    }

    pub fn len(&self) -> usize {
        self.alphabets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabets.is_empty()
    }

    /// Returns the best matching alphabet together with how sure the match is.
    ///
    /// First `key` is compared against the standard names of every alphabet
    /// (`NATO`, `DIN 5009`). Otherwise it is read as a BCP 47 language tag
    /// and negotiated against the alphabets' locales. Without any match the
    /// default alphabet is returned.
    pub fn lookup(&self, key: &str) -> (&SpellingAlphabet, Exactness) {
        if let Some(alphabet) = self.lookup_name(key) {
            debug!(key, alphabet = %alphabet.locale(), "matched alphabet name");
            return (alphabet, Exactness::Exact);
        }
        self.lookup_locale(key)
    }

    /// Finds the alphabet with the standard name `name`, case sensitive.
    pub fn lookup_name(&self, name: &str) -> Option<&SpellingAlphabet> {
        self.alphabets
            .iter()
            .find(|a| a.names().iter().any(|n| n == name))
    }

    /// Negotiates `tag` against the alphabets' locales.
    pub fn lookup_locale(&self, tag: &str) -> (&SpellingAlphabet, Exactness) {
        let desired = match locale::parse_tag(tag) {
            Ok(desired) => desired,
            Err(e) => {
                debug!(tag, error = %e, "not a language tag");
                return (self.default_alphabet(), Exactness::Default);
            }
        };

        let (i, confidence) = self.matcher.best_match(&desired);
        let exactness = Exactness::from(confidence);
        debug!(tag, ?confidence, %exactness, "negotiated alphabet locale");
        match exactness {
            Exactness::Default => (self.default_alphabet(), exactness),
            _ => (&self.alphabets[i], exactness),
        }
    }
}
