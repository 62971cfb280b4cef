//! Lume Match Engine
//!
//! This crate provides the query-matching kernel for the Lume launcher,
//! designed to run identically in browser (WASM) and server (native)
//! environments. Given a result label and the user's typed fragment, it
//! decides whether the pair matches and computes a comparable relevance
//! score, including matches against pinyin transliterations of CJK labels
//! and their first-letter abbreviations.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `parallel` - Parallel ranking via rayon for large result sets
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use lume_match::MatchEngine;
//!
//! let engine = MatchEngine::new();
//!
//! // Contiguous substring match
//! assert!(engine.is_match("Windows Terminal", "term", false));
//!
//! // Acronym-style match against word starts
//! let result = engine.match_score("Microsoft SQL Server Management Studio", "mssms", false);
//! assert!(result.matched && result.score >= 1);
//! ```

pub mod combine;
pub mod fuzzy;
pub mod translit;

// Re-export main types at crate root
pub use combine::{bounded_product, multiply_terms};
pub use fuzzy::{
    is_match, match_score, match_score_json, rank_json, EngineConfig, MatchEngine, MatchResult,
    RankedMatch,
};
pub use translit::{has_phonetic, transliterations};
