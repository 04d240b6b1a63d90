// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning ranked search results into picks and cursor moves.

use wayfind_eligible::{Ability, AbilitySource, EligiblePicker, Space};

use crate::search::SearchResult;

/// Chooses the position a typeahead jump should land on.
///
/// Only matching (score > 0), in-bounds, enabled results are considered. The
/// highest score wins; ties go to the first candidate after `after` in
/// traversal order, wrapping around, so repeated jumps cycle through equally
/// good matches.
pub fn best_match<'a, S, A>(
    results: impl IntoIterator<Item = &'a SearchResult<S::Position>>,
    space: &S,
    ability: &A,
    after: Option<S::Position>,
) -> Option<S::Position>
where
    S: Space + ?Sized,
    S::Position: 'a,
    A: AbilitySource<S::Position> + ?Sized,
{
    let len = space.len();
    let start = after.map_or(0, |p| space.preceding(p) + usize::from(space.contains(p)));
    results
        .into_iter()
        .filter(|result| result.is_match())
        .filter_map(|result| {
            let ordinal = space.ordinal_of(result.position)?;
            ability
                .ability(result.position)
                .is_enabled()
                .then_some((result, (ordinal + len - start % len.max(1)) % len))
        })
        .min_by(|(a, a_distance), (b, b_distance)| {
            b.score.cmp(&a.score).then(a_distance.cmp(b_distance))
        })
        .map(|(result, _)| result.position)
}

/// Picks the best match, as chosen by [`best_match`], from the picker's location.
pub fn jump_pick<'a, S, A>(
    picker: &mut EligiblePicker<S, A>,
    results: impl IntoIterator<Item = &'a SearchResult<S::Position>>,
) -> Option<Ability>
where
    S: Space,
    S::Position: 'a,
    A: AbilitySource<S::Position>,
{
    let target = best_match(results, picker.space(), picker.ability_source(), picker.location())?;
    picker.exact(target)
}

/// Moves the picker's location to the best match without picking.
pub fn jump_navigate<'a, S, A>(
    picker: &mut EligiblePicker<S, A>,
    results: impl IntoIterator<Item = &'a SearchResult<S::Position>>,
) -> Option<Ability>
where
    S: Space,
    S::Position: 'a,
    A: AbilitySource<S::Position>,
{
    let target = best_match(results, picker.space(), picker.ability_source(), picker.location())?;
    picker.navigate_exact(target)
}
