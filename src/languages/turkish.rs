use super::CaseRules;
use super::generic::{lower_char, upper_char};

/// Turkish casing: `I`/`ı` and `İ`/`i` are separate letter pairs.
pub struct Turkish;

impl CaseRules for Turkish {
    fn to_lower(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                'I' => 'ı',
                'İ' => 'i',
                _ => lower_char(c),
            })
            .collect()
    }

    fn to_upper(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                'i' => 'İ',
                'ı' => 'I',
                _ => upper_char(c),
            })
            .collect()
    }
}
