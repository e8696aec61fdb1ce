use std::fmt;

use serde::Serialize;

use crate::locale::Confidence;

/// How certain a lookup result is.
///
/// Says whether a value was explicitly requested, picked as the most likely
/// of several alternatives, or is the default because nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Exactness {
    /// Nothing matched; the default value was used.
    Default,
    /// Most likely value out of a set of alternatives.
    Guess,
    /// Exact match or explicitly named value.
    Exact,
}

impl fmt::Display for Exactness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Exactness::Default => "Default",
            Exactness::Guess => "Guess",
            Exactness::Exact => "Exact",
        };
        f.write_str(name)
    }
}

impl From<Confidence> for Exactness {
    fn from(c: Confidence) -> Self {
        match c {
            Confidence::No => Exactness::Default,
            Confidence::Low | Confidence::High => Exactness::Guess,
            Confidence::Exact => Exactness::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Exactness::Default.to_string(), "Default");
        assert_eq!(Exactness::Guess.to_string(), "Guess");
        assert_eq!(Exactness::Exact.to_string(), "Exact");
    }

    #[test]
    fn test_from_confidence() {
        assert_eq!(Exactness::from(Confidence::No), Exactness::Default);
        assert_eq!(Exactness::from(Confidence::Low), Exactness::Guess);
        assert_eq!(Exactness::from(Confidence::High), Exactness::Guess);
        assert_eq!(Exactness::from(Confidence::Exact), Exactness::Exact);
    }

    #[test]
    fn test_order() {
        assert!(Exactness::Default < Exactness::Guess);
        assert!(Exactness::Guess < Exactness::Exact);
    }
}
