// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List and plane query engines: a [`Query`] plus ranked search results.

use alloc::string::String;
use alloc::vec::Vec;

use nucleo_matcher::pattern::Atom;
use wayfind_eligible::{
    Ability, AbilitySource, EligiblePicker, ListSpace, PlanePosition, PlaneSpace, Space,
};

use crate::candidates::CandidateSource;
use crate::query::{PasteOptions, Query, TypeOptions};
use crate::score::Scorer;
use crate::typeahead;

/// One scored candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchResult<P> {
    /// Candidate position.
    pub position: P,
    /// Fuzzy score; `0` means no match.
    pub score: u16,
}

impl<P> SearchResult<P> {
    /// Returns `true` if the candidate matched the query.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Typeahead search over a list.
///
/// ```rust
/// use wayfind_eligible::ListSpace;
/// use wayfind_query::{ListQuery, PasteOptions};
///
/// let candidates = ["Baleada", "foo", "bear"];
/// let mut search = ListQuery::new();
/// search.paste("e", 0, PasteOptions::default());
///
/// let results = search.search(&ListSpace::new(3), &candidates[..]);
/// assert_eq!(results.iter().filter(|r| r.is_match()).count(), 2);
/// // The non-matching candidate ranks last.
/// assert_eq!(results[2].position, 1);
/// ```
#[derive(Debug, Default)]
pub struct ListQuery {
    query: Query,
    scorer: Scorer,
    text: String,
    results: Vec<SearchResult<usize>>,
}

impl ListQuery {
    /// Creates a list query with the default clear delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list query around an existing [`Query`].
    #[must_use]
    pub fn with_query(query: Query) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// The query buffer.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Mutable access to the query buffer.
    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    /// See [`Query::paste`].
    pub fn paste(&mut self, text: &str, now: u64, options: PasteOptions) {
        self.query.paste(text, now, options);
    }

    /// See [`Query::type_char`].
    pub fn type_char(&mut self, character: char, now: u64, options: TypeOptions) {
        self.query.type_char(character, now, options);
    }

    /// See [`Query::tick`].
    pub fn tick(&mut self, now: u64) -> bool {
        self.query.tick(now)
    }

    /// Results of the most recent search, best first.
    #[must_use]
    pub fn results(&self) -> &[SearchResult<usize>] {
        &self.results
    }

    /// Scores every position of `space` against the current query text.
    ///
    /// Results are ranked by score, best first, with ties in index order. An
    /// empty query yields every candidate with score `0`.
    pub fn search<C>(&mut self, space: &ListSpace, candidates: &C) -> &[SearchResult<usize>]
    where
        C: CandidateSource<usize> + ?Sized,
    {
        let pattern = Scorer::pattern(self.query.text());
        self.results.clear();
        let positions = (0..space.len()).filter_map(|ordinal| space.position_at(ordinal));
        score_into(
            &mut self.results,
            &mut self.scorer,
            pattern.as_ref(),
            &mut self.text,
            positions,
            candidates,
        );
        &self.results
    }

    /// Picks the best eligible match from the last search. See [`typeahead::best_match`].
    pub fn jump_pick<A>(&self, picker: &mut EligiblePicker<ListSpace, A>) -> Option<Ability>
    where
        A: AbilitySource<usize>,
    {
        typeahead::jump_pick(picker, &self.results)
    }

    /// Moves to the best eligible match from the last search without picking.
    pub fn jump_navigate<A>(&self, picker: &mut EligiblePicker<ListSpace, A>) -> Option<Ability>
    where
        A: AbilitySource<usize>,
    {
        typeahead::jump_navigate(picker, &self.results)
    }
}

/// Typeahead search over a plane, ranked independently per row.
#[derive(Debug, Default)]
pub struct PlaneQuery {
    query: Query,
    scorer: Scorer,
    text: String,
    results: Vec<Vec<SearchResult<PlanePosition>>>,
}

impl PlaneQuery {
    /// Creates a plane query with the default clear delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plane query around an existing [`Query`].
    #[must_use]
    pub fn with_query(query: Query) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// The query buffer.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Mutable access to the query buffer.
    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    /// See [`Query::paste`].
    pub fn paste(&mut self, text: &str, now: u64, options: PasteOptions) {
        self.query.paste(text, now, options);
    }

    /// See [`Query::type_char`].
    pub fn type_char(&mut self, character: char, now: u64, options: TypeOptions) {
        self.query.type_char(character, now, options);
    }

    /// See [`Query::tick`].
    pub fn tick(&mut self, now: u64) -> bool {
        self.query.tick(now)
    }

    /// Per-row results of the most recent search, each row best first.
    #[must_use]
    pub fn results(&self) -> &[Vec<SearchResult<PlanePosition>>] {
        &self.results
    }

    /// Scores every cell of `space`, producing one ranked list per row.
    pub fn search<C>(
        &mut self,
        space: &PlaneSpace,
        candidates: &C,
    ) -> &[Vec<SearchResult<PlanePosition>>]
    where
        C: CandidateSource<PlanePosition> + ?Sized,
    {
        let pattern = Scorer::pattern(self.query.text());
        self.results.clear();
        for (row, &len) in space.row_lengths().iter().enumerate() {
            let mut ranked = Vec::with_capacity(len);
            let cells = (0..len).map(|column| PlanePosition::new(row, column));
            score_into(
                &mut ranked,
                &mut self.scorer,
                pattern.as_ref(),
                &mut self.text,
                cells,
                candidates,
            );
            self.results.push(ranked);
        }
        &self.results
    }

    /// Picks the best eligible match across all rows of the last search.
    pub fn jump_pick<A>(&self, picker: &mut EligiblePicker<PlaneSpace, A>) -> Option<Ability>
    where
        A: AbilitySource<PlanePosition>,
    {
        typeahead::jump_pick(picker, self.results.iter().flatten())
    }

    /// Moves to the best eligible match across all rows without picking.
    pub fn jump_navigate<A>(&self, picker: &mut EligiblePicker<PlaneSpace, A>) -> Option<Ability>
    where
        A: AbilitySource<PlanePosition>,
    {
        typeahead::jump_navigate(picker, self.results.iter().flatten())
    }
}

fn score_into<P: Copy, C>(
    results: &mut Vec<SearchResult<P>>,
    scorer: &mut Scorer,
    pattern: Option<&Atom>,
    text: &mut String,
    positions: impl Iterator<Item = P>,
    candidates: &C,
) where
    C: CandidateSource<P> + ?Sized,
{
    for position in positions {
        let score = match pattern {
            Some(pattern) => {
                text.clear();
                candidates.write_text(position, text);
                scorer.score_pattern(pattern, text)
            }
            None => 0,
        };
        results.push(SearchResult { position, score });
    }
    // Stable sort keeps traversal order among equal scores.
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use wayfind_eligible::Ability;

    #[test]
    fn list_query_counts_matches() {
        let mut search = ListQuery::new();
        search.paste("e", 0, PasteOptions::default());
        let candidates = vec!["Baleada", "foo", "bear"];
        let results = search.search(&ListSpace::new(3), &candidates);
        assert_eq!(results.len(), 3);
        assert_eq!(results.iter().filter(|r| r.score > 0).count(), 2);
    }

    #[test]
    fn empty_query_scores_everything_zero_in_order() {
        let mut search = ListQuery::new();
        let candidates = ["a", "b", "c"];
        let results = search.search(&ListSpace::new(3), &candidates[..]);
        let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(results.iter().all(|r| r.score == 0));
    }

    #[test]
    fn accessor_candidates_are_scored() {
        let names = ["zero", "one", "two"];
        let mut search = ListQuery::new();
        search.paste("tw", 0, PasteOptions::default());
        let results = search.search(&ListSpace::new(3), &|i: usize| names[i]);
        assert_eq!(results[0].position, 2);
        assert!(results[0].is_match());
        assert!(!results[1].is_match());
    }

    #[test]
    fn plane_query_ranks_rows_independently() {
        let rows = vec![
            vec!["Baleada", "foo", "bar"],
            vec!["bear", "eel", "tree"],
            vec!["sky", "fog"],
        ];
        let space = PlaneSpace::new(rows.iter().map(Vec::len));
        let mut search = PlaneQuery::new();
        search.paste("e", 0, PasteOptions::default());
        let results = search.search(&space, &rows);
        let counts: Vec<usize> = results
            .iter()
            .map(|row| row.iter().filter(|r| r.score > 0).count())
            .collect();
        assert_eq!(counts, vec![1, 3, 0]);
        assert_eq!(results[0][0].position, PlanePosition::new(0, 0));
    }

    #[test]
    fn jump_targets_the_best_eligible_match() {
        let candidates = vec!["apple", "banana", "blueberry", "cherry"];
        let mut picker = EligiblePicker::new(ListSpace::new(4), |i: usize| Ability::from(i != 1));
        let mut search = ListQuery::new();
        search.paste("b", 0, PasteOptions::default());
        search.search(&ListSpace::new(4), &candidates);
        assert_eq!(search.jump_pick(&mut picker), Some(Ability::Enabled));
        assert_eq!(picker.picks(), &[2]);

        search.paste("q", 0, PasteOptions::default());
        search.search(&ListSpace::new(4), &candidates);
        assert_eq!(search.jump_navigate(&mut picker), None);
        assert_eq!(picker.location(), Some(2));
    }
}
