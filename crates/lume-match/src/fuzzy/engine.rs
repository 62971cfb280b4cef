//! MatchEngine - label/search matching and scoring over pinyin candidates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::strategies;
use crate::translit;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Score reported for the trivial empty-search match.
const EMPTY_SEARCH_SCORE: i64 = 1;

/// The outcome of matching one label against one search fragment.
///
/// `score` is a comparable relevance value: higher means more relevant.
/// It is only meaningful when `matched` is true; misses carry score 0 and
/// every hit scores at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: bool,
    pub score: i64,
}

impl MatchResult {
    fn hit(score: i64) -> Self {
        Self {
            matched: true,
            score: score.max(1),
        }
    }

    fn miss() -> Self {
        Self {
            matched: false,
            score: 0,
        }
    }
}

/// A ranked result row: the index of a matching label in the caller's slice
/// and its score. Equal scores keep their original relative order, so the
/// index doubles as the stable tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub index: usize,
    pub score: i64,
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Ceiling on transliteration candidates per label. Bounds the
    /// combinatorial expansion of polyphone-heavy labels.
    pub max_candidates: usize,
    /// Label count past which [`MatchEngine::rank`] fans out over a rayon
    /// pool, when the `parallel` feature is enabled.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_candidates: 1000,
            parallel_threshold: 1000,
        }
    }
}

/// Stateless matching and scoring engine.
///
/// Holds only an immutable [`EngineConfig`]; it is safe to share across
/// threads and to call concurrently. Every call operates solely on its own
/// inputs and allocates only transient intermediate values.
pub struct MatchEngine {
    config: EngineConfig,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Create a new MatchEngine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Does `search` fuzzily match `label`?
    ///
    /// With `use_pinyin`, a CJK-bearing label also matches through any of
    /// its transliteration candidates. Empty searches match everything.
    pub fn is_match(&self, label: &str, search: &str, use_pinyin: bool) -> bool {
        self.match_score(label, search, use_pinyin).matched
    }

    /// Match and score `search` against `label`.
    ///
    /// The label itself is scored first; with `use_pinyin`, every
    /// transliteration candidate is scored as well and the best score wins.
    /// Expansion runs at most once per call, and the candidate ceiling keeps
    /// the whole computation bounded regardless of label length.
    pub fn match_score(&self, label: &str, search: &str, use_pinyin: bool) -> MatchResult {
        if search.is_empty() {
            return MatchResult::hit(EMPTY_SEARCH_SCORE);
        }

        let mut best = strategies::score_candidate(label, search);

        if use_pinyin && translit::has_phonetic(label) {
            for candidate in translit::transliterations(label, self.config.max_candidates) {
                if let Some(score) = strategies::score_candidate(&candidate, search) {
                    best = Some(best.map_or(score, |b| b.max(score)));
                }
            }
        }

        match best {
            Some(score) => MatchResult::hit(score),
            None => MatchResult::miss(),
        }
    }

    /// Score every label and return the matching ones, best first.
    ///
    /// Results are sorted by score descending; ties keep the labels'
    /// original relative order. Non-matching labels are discarded.
    pub fn rank<S: AsRef<str> + Sync>(
        &self,
        labels: &[S],
        search: &str,
        use_pinyin: bool,
    ) -> Vec<RankedMatch> {
        let mut matches = self.score_all(labels, search, use_pinyin);

        matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index)));

        debug!(
            total = labels.len(),
            matched = matches.len(),
            "ranked result set"
        );

        matches
    }

    /// Score labels - parallel on native past the threshold, sequential
    /// otherwise.
    #[cfg(feature = "parallel")]
    fn score_all<S: AsRef<str> + Sync>(
        &self,
        labels: &[S],
        search: &str,
        use_pinyin: bool,
    ) -> Vec<RankedMatch> {
        if labels.len() >= self.config.parallel_threshold {
            labels
                .par_iter()
                .enumerate()
                .filter_map(|(index, label)| {
                    let result = self.match_score(label.as_ref(), search, use_pinyin);
                    result.matched.then_some(RankedMatch {
                        index,
                        score: result.score,
                    })
                })
                .collect()
        } else {
            self.score_sequential(labels, search, use_pinyin)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all<S: AsRef<str> + Sync>(
        &self,
        labels: &[S],
        search: &str,
        use_pinyin: bool,
    ) -> Vec<RankedMatch> {
        self.score_sequential(labels, search, use_pinyin)
    }

    fn score_sequential<S: AsRef<str>>(
        &self,
        labels: &[S],
        search: &str,
        use_pinyin: bool,
    ) -> Vec<RankedMatch> {
        labels
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                let result = self.match_score(label.as_ref(), search, use_pinyin);
                result.matched.then_some(RankedMatch {
                    index,
                    score: result.score,
                })
            })
            .collect()
    }
}

/// [`MatchEngine::is_match`] over a default-configuration engine.
pub fn is_match(label: &str, search: &str, use_pinyin: bool) -> bool {
    MatchEngine::new().is_match(label, search, use_pinyin)
}

/// [`MatchEngine::match_score`] over a default-configuration engine.
pub fn match_score(label: &str, search: &str, use_pinyin: bool) -> MatchResult {
    MatchEngine::new().match_score(label, search, use_pinyin)
}

/// Input for the WASM match_score function.
#[derive(Debug, Deserialize)]
pub struct MatchInput {
    pub label: String,
    pub search: String,
    #[serde(default)]
    pub pinyin: bool,
}

/// Input for the WASM rank function.
#[derive(Debug, Deserialize)]
pub struct RankInput {
    pub labels: Vec<String>,
    pub search: String,
    #[serde(default)]
    pub pinyin: bool,
}

/// Output of the WASM rank function.
#[derive(Debug, Serialize)]
pub struct RankOutput {
    pub matches: Vec<RankedMatch>,
    pub total: usize,
}

/// JSON entry point: deserialize input, match and score, serialize output.
/// Used by both wazero and browser WASM targets.
pub fn match_score_json(input: &str) -> String {
    let parsed: MatchInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            return format!(r#"{{"error":"invalid match input: {}"}}"#, e);
        }
    };

    let result = match_score(&parsed.label, &parsed.search, parsed.pinyin);

    match serde_json::to_string(&result) {
        Ok(json) => json,
        Err(e) => format!(r#"{{"error":"serialization failed: {}"}}"#, e),
    }
}

/// JSON entry point: deserialize labels, rank them, serialize output.
pub fn rank_json(input: &str) -> String {
    let parsed: RankInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            return format!(r#"{{"error":"invalid rank input: {}"}}"#, e);
        }
    };

    let matches = MatchEngine::new().rank(&parsed.labels, &parsed.search, parsed.pinyin);
    let total = matches.len();

    match serde_json::to_string(&RankOutput { matches, total }) {
        Ok(json) => json,
        Err(e) => format!(r#"{{"error":"serialization failed: {}"}}"#, e),
    }
}
