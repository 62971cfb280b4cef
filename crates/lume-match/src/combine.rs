//! Bounded combinatorial expansion of per-position alternatives.
//!
//! Transliteration turns a label into one set of alternative tokens per
//! character position. Matching wants whole phrases, so the sets are folded
//! left to right into their cross product. A label full of polyphones makes
//! that product exponential, which is why every step is capped: growth stops
//! once `cap` phrases exist, and later positions then contribute only their
//! first alternative. Every call terminates in bounded time and memory no
//! matter how long the label is.
//!
//! Ordering is stable and deterministic: earlier positions vary slowest,
//! the last position's alternatives vary fastest.

use tracing::debug;

/// One expansion step: append each of `alternatives` to each accumulated
/// phrase.
///
/// `[[1, 2]] x [3, 4]` becomes `[[1, 2, 3], [1, 2, 4]]`. An empty
/// accumulator seeds one phrase per alternative. At most `cap` phrases are
/// produced; combinations past the cap are discarded, never materialized.
pub fn multiply_terms(
    terms: Vec<Vec<String>>,
    alternatives: &[String],
    cap: usize,
) -> Vec<Vec<String>> {
    if alternatives.is_empty() {
        return terms;
    }
    if terms.is_empty() {
        return alternatives
            .iter()
            .take(cap)
            .map(|alt| vec![alt.clone()])
            .collect();
    }

    let mut expanded =
        Vec::with_capacity(terms.len().saturating_mul(alternatives.len()).min(cap));
    'grow: for phrase in &terms {
        for alt in alternatives {
            if expanded.len() == cap {
                break 'grow;
            }
            let mut next = phrase.clone();
            next.push(alt.clone());
            expanded.push(next);
        }
    }

    expanded
}

/// Fold [`multiply_terms`] over all positions, keeping at most `cap` phrases.
///
/// Once the accumulator is saturated, remaining positions extend every phrase
/// in place with their first alternative instead of cross-multiplying. That
/// keeps the worst case linear in label length rather than quadratic, and
/// every phrase still spans all positions.
pub fn bounded_product(sets: &[Vec<String>], cap: usize) -> Vec<Vec<String>> {
    let mut phrases: Vec<Vec<String>> = Vec::new();
    let mut truncated = false;

    for set in sets {
        if set.is_empty() {
            continue;
        }
        if phrases.is_empty() {
            truncated |= set.len() > cap;
            phrases = set.iter().take(cap).map(|alt| vec![alt.clone()]).collect();
            continue;
        }
        if set.len() == 1 || phrases.len() >= cap {
            truncated |= set.len() > 1;
            for phrase in &mut phrases {
                phrase.push(set[0].clone());
            }
            continue;
        }
        truncated |= phrases.len().saturating_mul(set.len()) > cap;
        phrases = multiply_terms(phrases, set, cap);
    }

    if truncated {
        debug!(cap, positions = sets.len(), "candidate ceiling reached");
    }

    phrases
}
