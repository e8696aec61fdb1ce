//! BCP 47 language tag parsing and best-match negotiation.
//!
//! Matching compares tags after adding likely subtags (`de` becomes
//! `de-Latn-DE`), so a bare language and its most likely region are the
//! same tag. Everything else falls back by region, then by script. Among
//! several regional variants of a language, the one sharing the longest
//! CLDR parent chain wins (`en-AU` and `en-GB` both fall back to `en-001`).

use icu_locid::subtags::Language;
use icu_locid::{LanguageIdentifier, Locale, ParserError};
use icu_locid_transform::LocaleExpander;
use icu_locid_transform::fallback::LocaleFallbacker;

/// Error returned for malformed language tags.
pub type ParseTagError = ParserError;

/// Parses a BCP 47 tag into its language identifier.
///
/// Extensions and private use subtags are accepted and dropped.
pub fn parse_tag(tag: &str) -> Result<LanguageIdentifier, ParseTagError> {
    if tag.is_empty() {
        return Err(ParserError::InvalidLanguage);
    }
    Locale::try_from_bytes(tag.as_bytes()).map(|locale| locale.id)
}

/// How closely a supported tag matches a desired one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    No,
    /// Same language, different script.
    Low,
    /// Same language and script, different region or variants.
    High,
    /// Identical once likely subtags are added.
    Exact,
}

struct Candidate {
    tag: LanguageIdentifier,
    max: LanguageIdentifier,
    parents: Vec<String>,
}

/// Picks the closest of a fixed set of supported tags.
///
/// Supported tags are maximized once, up front. The expander itself reads
/// compiled-in data and is cheap to create, so it is not kept around.
pub struct LanguageMatcher {
    supported: Vec<Candidate>,
}

impl LanguageMatcher {
    pub fn new<I>(supported: I) -> Self
    where
        I: IntoIterator<Item = LanguageIdentifier>,
    {
        let expander = LocaleExpander::new_extended();
        let supported = supported
            .into_iter()
            .map(|tag| {
                let max = maximize(&expander, &tag);
                let parents = region_chain(&max);
                Candidate { tag, max, parents }
            })
            .collect();
        Self { supported }
    }

    /// Returns the index of the best supported tag and how well it matches.
    ///
    /// Candidates of equal confidence are ranked by how many regional
    /// parents they share with `desired`; remaining ties keep the earliest.
    /// With no match at all the index is 0. An undetermined language (`und`,
    /// `und-CH`) never matches.
    pub fn best_match(&self, desired: &LanguageIdentifier) -> (usize, Confidence) {
        if desired.language == Language::UND {
            return (0, Confidence::No);
        }
        let desired_max = maximize(&LocaleExpander::new_extended(), desired);
        let desired_parents = region_chain(&desired_max);

        let mut best = (0, Confidence::No);
        let mut best_shared = 0;
        for (i, candidate) in self.supported.iter().enumerate() {
            let confidence = if candidate.tag == *desired || candidate.max == desired_max {
                Confidence::Exact
            } else if !same_language(&candidate.max.language, &desired_max.language) {
                Confidence::No
            } else if candidate.max.script == desired_max.script {
                Confidence::High
            } else {
                Confidence::Low
            };

            if confidence == Confidence::Exact {
                return (i, confidence);
            }
            if confidence == Confidence::No {
                continue;
            }
            let shared = candidate
                .parents
                .iter()
                .filter(|p| desired_parents.contains(p))
                .count();
            if (confidence, shared) > (best.1, best_shared) {
                best = (i, confidence);
                best_shared = shared;
            }
        }
        best
    }
}

fn maximize(expander: &LocaleExpander, tag: &LanguageIdentifier) -> LanguageIdentifier {
    let mut max = tag.clone();
    expander.maximize(&mut max);
    max
}

/// Language and region of `max`, followed by its CLDR fallback parents,
/// e.g. `en-AU`, `en-001`, `en`.
fn region_chain(max: &LanguageIdentifier) -> Vec<String> {
    let mut id = LanguageIdentifier::UND;
    id.language = max.language;
    id.region = max.region;

    let fallbacker = LocaleFallbacker::new().for_config(Default::default());
    let mut iter = fallbacker.fallback_for(id.into());
    let mut chain = Vec::new();
    while !iter.get().is_und() {
        chain.push(iter.get().to_string());
        iter.step();
    }
    chain
}

fn same_language(a: &Language, b: &Language) -> bool {
    macrolanguage(a) == macrolanguage(b)
}

// Norwegian Bokmål and Nynorsk are written with the same letters.
fn macrolanguage(lang: &Language) -> &str {
    match lang.as_str() {
        "nb" | "nn" => "no",
        other => other,
    }
}
