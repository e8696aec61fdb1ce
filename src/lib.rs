//! Spell text aloud with spelling alphabets.
//!
//! Every character of the input is replaced by a word (`a` becomes `Alfa`)
//! so the text can be read out without ambiguity. Alphabets are chosen by
//! standard name (`NATO`, `DIN 5009`) or by BCP 47 language tag.
//!
//! ```
//! use spell_alphabet::{lookup, Exactness};
//!
//! let (alphabet, exactness) = lookup("de-DE");
//! assert_eq!(exactness, Exactness::Exact);
//! assert_eq!(alphabet.spell("Schal"), "Schule Anton Ludwig");
//! ```

pub mod alphabet;
pub mod data;
pub mod error;
pub mod exactness;
pub mod languages;
pub mod locale;
pub mod registry;
pub mod token;

pub use alphabet::SpellingAlphabet;
pub use error::{Result, SpellError};
pub use exactness::Exactness;
pub use languages::CaseFold;
pub use registry::{Registry, registry};
pub use token::SpelledToken;

/// Looks up the best compiled-in alphabet for a name or language tag.
pub fn lookup(key: &str) -> (&'static SpellingAlphabet, Exactness) {
    registry().lookup(key)
}

/// All compiled-in alphabets.
pub fn all() -> &'static [SpellingAlphabet] {
    registry().alphabets()
}
