// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fuzzy scoring of candidate text against a query, powered by `nucleo-matcher`.

use alloc::vec::Vec;
use core::fmt;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Reusable fuzzy scorer.
///
/// Matching is subsequence-based with smart case: a lowercase query matches
/// case-insensitively, a query containing uppercase matches case-sensitively.
/// Scores are `0` for no match and positive otherwise; higher is better.
pub struct Scorer {
    matcher: Matcher,
    haystack: Vec<char>,
}

impl fmt::Debug for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scorer").finish_non_exhaustive()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    /// Creates a scorer with the default matcher configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            haystack: Vec::new(),
        }
    }

    /// Compiles `query` for repeated scoring, or `None` for an empty query.
    #[must_use]
    pub fn pattern(query: &str) -> Option<Atom> {
        if query.is_empty() {
            return None;
        }
        Some(Atom::new(
            query,
            CaseMatching::Smart,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        ))
    }

    /// Scores a single candidate against `query`.
    pub fn score(&mut self, query: &str, candidate: &str) -> u16 {
        match Self::pattern(query) {
            Some(atom) => self.score_pattern(&atom, candidate),
            None => 0,
        }
    }

    /// Scores a candidate against a compiled pattern.
    pub fn score_pattern(&mut self, pattern: &Atom, candidate: &str) -> u16 {
        let haystack = Utf32Str::new(candidate, &mut self.haystack);
        pattern
            .score(haystack, &mut self.matcher)
            .map_or(0, |score| score.max(1))
    }
}
