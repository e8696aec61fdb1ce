use super::CaseRules;

/// Unicode simple case mapping, one character at a time.
///
/// Characters whose full mapping expands (`ß` to `SS`, `İ` to `i̇`) keep a
/// single character: the first one when lowering, the original when uppering.
/// This keeps folded text the same length as its input.
pub struct Generic;

impl CaseRules for Generic {
    fn to_lower(&self, text: &str) -> String {
        text.chars().map(lower_char).collect()
    }

    fn to_upper(&self, text: &str) -> String {
        text.chars().map(upper_char).collect()
    }
}

pub(crate) fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

pub(crate) fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
