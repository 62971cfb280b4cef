//! Match and score primitives for a single candidate string.
//!
//! Strategies are tried in order of specificity and the first hit wins.
//! Score bands are disjoint, so a better strategy always outranks a worse
//! one regardless of penalties:
//!
//! 1. Exact equality (1000, +25 case-exact)
//! 2. Prefix match (600, +25 case-exact)
//! 3. Contiguous substring (400 minus position penalty, floor 300)
//! 4. Word-anchored subsequence (200 minus gap penalty, floor 50)
//!
//! The subsequence strategy is stricter than "characters appear in order":
//! every matched character must either start a word or extend the
//! previous match. Acronyms like `"mssms"` for
//! `"Microsoft SQL Server Management Studio"` match; loosely scattered
//! fragments like `"test"` inside `"Microsoft Remote Desktop"` do not.

pub(crate) const EXACT_BASE: i64 = 1000;
pub(crate) const PREFIX_BASE: i64 = 600;
pub(crate) const SUBSTRING_BASE: i64 = 400;
pub(crate) const SUBSEQUENCE_BASE: i64 = 200;
pub(crate) const CASE_BONUS: i64 = 25;

/// Caps keep the bands disjoint: 400 - 100 > 200 + 25 and 200 - 150 >= 1.
const SUBSTRING_POSITION_CAP: i64 = 100;
const SUBSEQUENCE_GAP_CAP: i64 = 150;

/// Score `search` against one candidate string.
///
/// Returns `None` when the candidate does not match. `search` must be
/// non-empty; empty searches are handled by the engine before any candidate
/// is consulted.
pub fn score_candidate(candidate: &str, search: &str) -> Option<i64> {
    let candidate_lower = candidate.to_lowercase();
    let search_lower = search.to_lowercase();

    // 1. Exact equality
    if candidate_lower == search_lower {
        let mut score = EXACT_BASE;
        if candidate == search {
            score += CASE_BONUS;
        }
        return Some(score);
    }

    // 2. Prefix match
    if candidate_lower.starts_with(&search_lower) {
        let mut score = PREFIX_BASE;
        if candidate.starts_with(search) {
            score += CASE_BONUS;
        }
        return Some(score);
    }

    // 3. Contiguous substring, penalized by how far in it starts
    if let Some(pos) = find_substring(&candidate_lower, &search_lower) {
        let chars_before = candidate_lower[..pos].chars().count() as i64;
        let mut score = SUBSTRING_BASE - chars_before.min(SUBSTRING_POSITION_CAP);
        if candidate.contains(search) {
            score += CASE_BONUS;
        }
        return Some(score);
    }

    // 4. Word-anchored subsequence, penalized by skipped characters
    let (first, last) = anchored_subsequence_span(&candidate_lower, &search_lower)?;
    let matched_len = search_lower.chars().count() as i64;
    let gaps = (last - first + 1) as i64 - matched_len;
    let mut score = SUBSEQUENCE_BASE - gaps.max(0).min(SUBSEQUENCE_GAP_CAP);
    if anchored_subsequence_span(candidate, search).is_some() {
        score += CASE_BONUS;
    }
    Some(score)
}

/// Substring search - SIMD via memchr on native, pure Rust otherwise.
#[cfg(feature = "simd")]
fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
    // Byte-level hits must land on char boundaries to be real matches.
    memchr::memmem::find_iter(haystack.as_bytes(), needle.as_bytes()).find(|&pos| {
        haystack.is_char_boundary(pos) && haystack.is_char_boundary(pos + needle.len())
    })
}

#[cfg(not(feature = "simd"))]
fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
    haystack.find(needle)
}

/// Find `needle` as a word-anchored subsequence of `haystack`.
///
/// Every matched character either sits at a word start (first alphanumeric
/// after a non-alphanumeric or the string start) or immediately follows the
/// previously matched character. Returns the char positions of the earliest
/// anchor and the earliest completion, or `None` when no assignment exists.
fn anchored_subsequence_span(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let hay: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || hay.is_empty() {
        return None;
    }

    let starts = word_starts(&hay);

    // Frontier holds every position the current needle character can occupy.
    let mut frontier: Vec<usize> = hay
        .iter()
        .enumerate()
        .filter(|&(i, &c)| starts[i] && c == needle[0])
        .map(|(i, _)| i)
        .collect();
    if frontier.is_empty() {
        return None;
    }
    let first_anchor = frontier[0];

    for &nc in &needle[1..] {
        let earliest = frontier[0];
        let mut next = Vec::new();
        for (i, &c) in hay.iter().enumerate().skip(earliest + 1) {
            if c != nc {
                continue;
            }
            // A word start is reachable from any earlier match; a mid-word
            // character only from the position directly before it.
            if starts[i] || frontier.binary_search(&(i - 1)).is_ok() {
                next.push(i);
            }
        }
        if next.is_empty() {
            return None;
        }
        frontier = next;
    }

    Some((first_anchor, frontier[0]))
}

fn word_starts(chars: &[char]) -> Vec<bool> {
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| c.is_alphanumeric() && (i == 0 || !chars[i - 1].is_alphanumeric()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_outranks_everything() {
        let exact = score_candidate("terminal", "terminal").unwrap();
        let prefix = score_candidate("terminals", "terminal").unwrap();
        assert!(exact > prefix);
        assert!(exact >= EXACT_BASE);
    }

    #[test]
    fn case_exact_matches_score_higher() {
        let folded = score_candidate("Terminal", "terminal").unwrap();
        let exact = score_candidate("terminal", "terminal").unwrap();
        assert_eq!(exact, folded + CASE_BONUS);
    }

    #[test]
    fn prefix_outranks_interior_substring() {
        let prefix = score_candidate("terminal emulator", "term").unwrap();
        let interior = score_candidate("windows terminal", "term").unwrap();
        assert!(prefix > interior);
    }

    #[test]
    fn substring_outranks_subsequence() {
        let substring = score_candidate("windows terminal", "term").unwrap();
        let subsequence = score_candidate("tiny elegant rust matcher", "term").unwrap();
        assert!(substring > subsequence);
    }

    #[test]
    fn earlier_substrings_score_higher() {
        let early = score_candidate("a terminal", "term").unwrap();
        let late = score_candidate("the quick brown terminal", "term").unwrap();
        assert!(early > late);
    }

    #[test]
    fn acronym_matches_word_starts() {
        assert!(score_candidate("Microsoft SQL Server Management Studio", "mssms").is_some());
        assert!(score_candidate("Visual Studio Code", "vsc").is_some());
    }

    #[test]
    fn scattered_mid_word_fragments_do_not_match() {
        // t/e/s/t appear in order, but never anchored to word starts.
        assert!(score_candidate("Microsoft Remote Desktop", "test").is_none());
        assert!(score_candidate("OverLeaf-Latex: An online LaTeX editor", "exce").is_none());
    }

    #[test]
    fn subsequence_may_continue_past_a_word_start_anchor() {
        // "yinyue": anchors at "yin", runs through it, re-anchors at "yue".
        assert!(score_candidate("q q yin yue . a p p", "yinyue").is_some());
    }

    #[test]
    fn tighter_subsequences_score_higher() {
        let tight = score_candidate("w tone", "wt").unwrap();
        let loose = score_candidate("w and much later t", "wt").unwrap();
        assert!(tight > loose);
    }

    #[test]
    fn any_match_scores_at_least_one() {
        // Worst case: subsequence base minus the capped gap penalty.
        let candidate = format!("w {}t", "1 ".repeat(120));
        let score = score_candidate(&candidate, "wt").unwrap();
        assert!(score >= 1, "got {score}");
    }

    #[test]
    fn no_occurrence_means_no_match() {
        assert!(score_candidate("windows terminal", "xyz").is_none());
    }

    #[test]
    fn multibyte_candidates_are_safe_to_scan() {
        assert!(score_candidate("有道词典", "有道").is_some());
        assert!(score_candidate("有道词典", "词").is_some());
        assert!(score_candidate("日本語テキスト", "q").is_none());
    }
}
