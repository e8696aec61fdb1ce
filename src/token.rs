use serde::{Deserialize, Serialize};

/// One spelled unit of input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpelledToken {
    /// The matched slice of the input, in its original casing.
    pub text: String,
    /// The spoken phrase for `text`.
    pub phrase: String,
    /// `false` when no table entry matched and `phrase` is `text` in single quotes.
    pub matched: bool,
}

impl SpelledToken {
    pub fn matched(text: &str, phrase: &str) -> Self {
        Self {
            text: text.to_string(),
            phrase: phrase.to_string(),
            matched: true,
        }
    }

    pub fn unmatched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            phrase: format!("'{}'", text),
            matched: false,
        }
    }
}
