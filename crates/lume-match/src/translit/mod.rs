//! Pinyin transliteration expansion for CJK labels.
//!
//! A launcher label may mix Latin text and CJK ideographs. To let a
//! Latin-alphabet query hit a CJK label, every ideograph is expanded into its
//! phonetic readings - all of them, since many characters are polyphones with
//! more than one valid pronunciation. Each position contributes both the full
//! syllable and its first letter, so `"QQ音乐"` can be reached through
//! `"Q Q yin yue"` as well as the abbreviation `"Q Q y y"`.
//!
//! The reading table is the `pinyin` crate's static data, keyed by code
//! point and immutable for the lifetime of the process. All functions here
//! are pure: identical input always yields identical output.

use pinyin::ToPinyinMulti;

use crate::combine::bounded_product;

/// Returns true if any character of `label` has a phonetic reading.
///
/// Labels without phonetic data (pure Latin, digits, punctuation) skip
/// expansion entirely.
pub fn has_phonetic(label: &str) -> bool {
    label.to_pinyin_multi().flatten().next().is_some()
}

/// Per-character full-syllable alternatives.
///
/// Each position yields a non-empty set: all known readings of a CJK
/// character (toneless, lowercase, deduplicated in table order), or the
/// literal character itself when no phonetic data exists.
pub fn reading_sets(label: &str) -> Vec<Vec<String>> {
    position_sets(label, |reading| reading.to_string())
}

/// Per-character first-letter alternatives.
///
/// Parallels [`reading_sets`], but each reading contributes only its first
/// letter. Characters without phonetic data pass through unchanged.
pub fn abbreviation_sets(label: &str) -> Vec<Vec<String>> {
    position_sets(label, |reading| {
        reading.chars().take(1).collect::<String>()
    })
}

fn position_sets(label: &str, shorten: impl Fn(&str) -> String) -> Vec<Vec<String>> {
    let mut sets = Vec::new();

    for (ch, multi) in label.chars().zip(label.to_pinyin_multi()) {
        let tokens = match multi {
            Some(multi) => {
                let mut alternatives: Vec<String> = Vec::new();
                for reading in multi.into_iter() {
                    let token = shorten(reading.plain());
                    if !alternatives.contains(&token) {
                        alternatives.push(token);
                    }
                }
                if alternatives.is_empty() {
                    vec![ch.to_string()]
                } else {
                    alternatives
                }
            }
            None => vec![ch.to_string()],
        };
        sets.push(tokens);
    }

    sets
}

/// All transliteration candidate phrases for `label`, at most `cap` of them.
///
/// Full-syllable combinations come first, abbreviation combinations after,
/// each phrase being the per-position tokens joined by a single space.
/// Duplicates are dropped keeping the first occurrence. A label with no
/// phonetic data yields exactly one candidate: the label itself.
pub fn transliterations(label: &str, cap: usize) -> Vec<String> {
    if !has_phonetic(label) {
        return vec![label.to_string()];
    }

    let full = bounded_product(&reading_sets(label), cap);
    let abbreviated = bounded_product(&abbreviation_sets(label), cap);

    let mut seen: std::collections::HashSet<String, ahash::RandomState> =
        std::collections::HashSet::default();
    let mut phrases = Vec::new();

    for tokens in full.into_iter().chain(abbreviated) {
        let phrase = tokens.join(" ");
        if seen.insert(phrase.clone()) {
            phrases.push(phrase);
        }
        if phrases.len() == cap {
            break;
        }
    }

    phrases
}
