//! Fuzzy Matching Engine
//!
//! Decides whether a user-typed fragment matches a result label and scores
//! the pair for ranking. A label is matched as typed and, when pinyin mode
//! is on, through every transliteration candidate produced by
//! [`crate::translit`] and [`crate::combine`].
//!
//! # Strategies (in order of specificity)
//!
//! 1. Exact equality (score band 1000)
//! 2. Prefix match (score band 600)
//! 3. Contiguous substring (score band 400, position-penalized)
//! 4. Word-anchored subsequence (score band 200, gap-penalized)
//!
//! Bands are disjoint; a case-exact match earns a small bonus inside its
//! band. Matching is otherwise case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use lume_match::fuzzy::MatchEngine;
//!
//! let engine = MatchEngine::new();
//! assert!(engine.is_match("Windows Terminal", "term", false));
//!
//! let labels = vec!["Windows Terminal".to_string(), "Notes".to_string()];
//! let ranked = engine.rank(&labels, "term", false);
//! assert_eq!(ranked[0].index, 0);
//! ```

mod engine;
mod strategies;

pub use engine::{
    is_match, match_score, match_score_json, rank_json, EngineConfig, MatchEngine, MatchInput,
    MatchResult, RankInput, RankOutput, RankedMatch,
};
