//! Spelling and lookup against the compiled-in alphabets

use spell_alphabet::languages::title_case;
use spell_alphabet::{Exactness, SpellingAlphabet, all, lookup, registry};

fn assert_lookup(key: &str, tag: &str, exactness: Exactness) {
    let (alphabet, got) = lookup(key);
    assert_eq!(alphabet.lang_tag(), tag, "lookup({key:?}) alphabet");
    assert_eq!(got, exactness, "lookup({key:?}) exactness");
}

fn assert_case_insensitive(alphabet: &SpellingAlphabet) {
    let rules = alphabet.rules();
    for (key, phrase) in alphabet.symbols() {
        let title = title_case(rules, key);
        let upper = rules.to_upper(key);
        for input in [key, title.as_str(), upper.as_str()] {
            assert_eq!(
                alphabet.spell(input),
                phrase,
                "{}: {input:?} should be spelled as {phrase:?}",
                alphabet.lang_tag()
            );
        }
    }
}

#[test]
fn test_every_key_in_every_casing() {
    for alphabet in all() {
        assert_case_insensitive(alphabet);
    }
}

#[test]
fn test_registry_contents() {
    let r = registry();
    assert!(!r.is_empty());
    assert_eq!(r.default_alphabet().lang_tag(), "en");
    assert_eq!(r.default_alphabet().names(), ["ICAO", "NATO"]);

    let tags: Vec<_> = r.sorted_by_tag().iter().map(|a| a.lang_tag()).collect();
    let mut sorted = tags.clone();
    sorted.sort();
    assert_eq!(tags, sorted);
    let expected = [
        "cs", "da", "de-AT", "de-CH", "de-DE", "en", "en-GB", "es", "fi", "fr", "it", "nl", "no",
        "pt-BR", "pt-PT", "ro", "ru", "sl", "sv", "tr",
    ];
    for tag in expected {
        assert!(tags.iter().any(|t| t == tag), "missing alphabet {tag}");
    }
}

#[test]
fn test_lookup_by_name() {
    assert_lookup("DIN 5009", "de-DE", Exactness::Exact);
    assert_lookup("ÖNORM A 1081", "de-AT", Exactness::Exact);
    assert_lookup("NATO", "en", Exactness::Exact);
    assert_lookup("ICAO", "en", Exactness::Exact);
}

#[test]
fn test_lookup_exact_tags() {
    assert_lookup("de-DE", "de-DE", Exactness::Exact);
    assert_lookup("de-AT", "de-AT", Exactness::Exact);
    assert_lookup("de-CH", "de-CH", Exactness::Exact);
    assert_lookup("en", "en", Exactness::Exact);
    assert_lookup("en-GB", "en-GB", Exactness::Exact);
    assert_lookup("fr", "fr", Exactness::Exact);
    assert_lookup("nl", "nl", Exactness::Exact);
    assert_lookup("ru", "ru", Exactness::Exact);
    assert_lookup("pt-PT", "pt-PT", Exactness::Exact);
}

#[test]
fn test_lookup_likely_region_is_exact() {
    assert_lookup("de", "de-DE", Exactness::Exact);
    assert_lookup("en-US", "en", Exactness::Exact);
    assert_lookup("pt", "pt-BR", Exactness::Exact);
    assert_lookup("tr-TR", "tr", Exactness::Exact);
    assert_lookup("de-de", "de-DE", Exactness::Exact);
}

#[test]
fn test_lookup_guess() {
    assert_lookup("fr-CH", "fr", Exactness::Guess);
    assert_lookup("de-LI", "de-DE", Exactness::Guess);
    assert_lookup("it-CH", "it", Exactness::Guess);

    let (alphabet, exactness) = lookup("nb");
    assert_eq!(alphabet.lang_tag(), "no");
    assert_ne!(exactness, Exactness::Default);
}

#[test]
fn test_lookup_guess_follows_regional_parents() {
    // Commonwealth English falls back through en-001, like en-GB
    assert_lookup("en-AU", "en-GB", Exactness::Guess);
    assert_lookup("en-IN", "en-GB", Exactness::Guess);
    assert_lookup("en-NZ", "en-GB", Exactness::Guess);
    assert_lookup("pt-AO", "pt-PT", Exactness::Guess);
    assert_lookup("pt-MZ", "pt-PT", Exactness::Guess);
}

#[test]
fn test_lookup_default() {
    assert_lookup("zh", "en", Exactness::Default);
    assert_lookup("default", "en", Exactness::Default);
    assert_lookup("", "en", Exactness::Default);
    assert_lookup("und", "en", Exactness::Default);
    assert_lookup("DIN5009", "en", Exactness::Default);
    assert_lookup("not a language", "en", Exactness::Default);
}

#[test]
fn test_spell_german() {
    let (de, _) = lookup("DIN 5009");
    assert_eq!(de.spell("es"), "Emil Samuel");
    assert_eq!(de.spell("Simon"), "Samuel Ida Martha Otto Nordpol");
    assert_eq!(de.spell("SCHULE"), "Schule Ulrich Ludwig Emil");
    assert_eq!(
        de.spell("Der Satz"),
        "Dora Emil Richard Leerzeichen Samuel Anton Theodor Zacharias"
    );
    assert_eq!(de.spell("Straße"), "Samuel Theodor Richard Anton Eszett Emil");
}

#[test]
fn test_spell_english() {
    let (en, _) = lookup("en");
    assert_eq!(
        en.spell("Hello, World!"),
        "Hotel Echo Lima Lima Oscar Comma Space Whiskey Oscar Romeo Lima Delta Exclamation Mark"
    );
    assert_eq!(en.spell("ä"), "'ä'");
}

#[test]
fn test_spell_spanish_digraphs() {
    let (es, _) = lookup("es");
    assert_eq!(es.spell("Llave"), "Llave Antonio Valencia España");
    assert_eq!(es.spell("Chile"), "Chocolate Inés Lorenzo España");
}

#[test]
fn test_spell_turkish_casing() {
    let (tr, _) = lookup("tr");
    assert_eq!(tr.spell("IĞDIR"), "Isparta yumuşak G Denizli Isparta Rize");
    assert_eq!(tr.spell("İzmir"), "İzmir Zonguldak Muş İzmir Rize");
}

#[test]
fn test_spell_czech_ch() {
    let (cs, _) = lookup("cs");
    assert_eq!(cs.spell("Chrudim"), "Chrudim Rudolf Urban David Ivan Marie");
}
