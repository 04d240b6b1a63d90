// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional search for eligible positions.
//!
//! Scans start strictly past `from`, so `from` itself may be ineligible or even
//! out of range. A `from` of `None` stands for "one before the start" when
//! scanning forward and "one past the end" when scanning backward.
//!
//! With `loops`, a scan that runs off the end restarts at the opposite boundary
//! and continues up to and including `from`. The wrapped result of a forward
//! scan is therefore the smallest eligible position at or before `from`.

use core::iter::successors;

use crate::ability::{Ability, AbilitySource};
use crate::space::{ListSpace, PlanePosition, PlaneSpace, Space};

/// Finds the first eligible position after `from` in traversal order.
pub fn to_next_eligible<S, A>(
    space: &S,
    from: Option<S::Position>,
    ability: &A,
    loops: bool,
) -> Option<S::Position>
where
    S: Space + ?Sized,
    A: AbilitySource<S::Position> + ?Sized,
{
    let len = space.len();
    let start = match from {
        None => 0,
        Some(p) => space.preceding(p) + usize::from(space.contains(p)),
    };
    walk_forward(space, ability, start, len).or_else(|| {
        if loops {
            walk_forward(space, ability, 0, start.min(len))
        } else {
            None
        }
    })
}

/// Finds the first eligible position before `from` in traversal order.
pub fn to_previous_eligible<S, A>(
    space: &S,
    from: Option<S::Position>,
    ability: &A,
    loops: bool,
) -> Option<S::Position>
where
    S: Space + ?Sized,
    A: AbilitySource<S::Position> + ?Sized,
{
    let len = space.len();
    let end = match from {
        None => len,
        Some(p) => space.preceding(p),
    };
    walk_backward(space, ability, 0, end).or_else(|| {
        if loops {
            walk_backward(space, ability, end, len)
        } else {
            None
        }
    })
}

/// Finds the next eligible column in `row`, after column `from`.
pub fn to_next_eligible_in_row<A>(
    space: &PlaneSpace,
    row: usize,
    from: Option<usize>,
    ability: &A,
    loops: bool,
) -> Option<PlanePosition>
where
    A: AbilitySource<PlanePosition> + ?Sized,
{
    let line = ListSpace::new(space.row_len(row));
    let cell = |column: usize| ability.ability(PlanePosition::new(row, column));
    to_next_eligible(&line, from, &cell, loops).map(|column| PlanePosition::new(row, column))
}

/// Finds the previous eligible column in `row`, before column `from`.
pub fn to_previous_eligible_in_row<A>(
    space: &PlaneSpace,
    row: usize,
    from: Option<usize>,
    ability: &A,
    loops: bool,
) -> Option<PlanePosition>
where
    A: AbilitySource<PlanePosition> + ?Sized,
{
    let line = ListSpace::new(space.row_len(row));
    let cell = |column: usize| ability.ability(PlanePosition::new(row, column));
    to_previous_eligible(&line, from, &cell, loops).map(|column| PlanePosition::new(row, column))
}

/// Finds the next eligible row in `column`, after row `from`.
///
/// Rows too short to have `column` are skipped.
pub fn to_next_eligible_in_column<A>(
    space: &PlaneSpace,
    column: usize,
    from: Option<usize>,
    ability: &A,
    loops: bool,
) -> Option<PlanePosition>
where
    A: AbilitySource<PlanePosition> + ?Sized,
{
    let line = ListSpace::new(space.row_count());
    let cell = |row: usize| column_cell(space, ability, PlanePosition::new(row, column));
    to_next_eligible(&line, from, &cell, loops).map(|row| PlanePosition::new(row, column))
}

/// Finds the previous eligible row in `column`, before row `from`.
///
/// Rows too short to have `column` are skipped.
pub fn to_previous_eligible_in_column<A>(
    space: &PlaneSpace,
    column: usize,
    from: Option<usize>,
    ability: &A,
    loops: bool,
) -> Option<PlanePosition>
where
    A: AbilitySource<PlanePosition> + ?Sized,
{
    let line = ListSpace::new(space.row_count());
    let cell = |row: usize| column_cell(space, ability, PlanePosition::new(row, column));
    to_previous_eligible(&line, from, &cell, loops).map(|row| PlanePosition::new(row, column))
}

fn column_cell<A>(space: &PlaneSpace, ability: &A, position: PlanePosition) -> Ability
where
    A: AbilitySource<PlanePosition> + ?Sized,
{
    if space.contains(position) {
        ability.ability(position)
    } else {
        Ability::Disabled
    }
}

/// First enabled position among ordinals `start..end`, walking forward.
fn walk_forward<S, A>(space: &S, ability: &A, start: usize, end: usize) -> Option<S::Position>
where
    S: Space + ?Sized,
    A: AbilitySource<S::Position> + ?Sized,
{
    successors(space.position_at(start), |&p| space.after(p))
        .take(end.saturating_sub(start))
        .find(|&position| ability.ability(position).is_enabled())
}

/// Last enabled position among ordinals `start..end`, walking backward.
fn walk_backward<S, A>(space: &S, ability: &A, start: usize, end: usize) -> Option<S::Position>
where
    S: Space + ?Sized,
    A: AbilitySource<S::Position> + ?Sized,
{
    let last = end.checked_sub(1).and_then(|i| space.position_at(i));
    successors(last, |&p| space.before(p))
        .take(end.saturating_sub(start))
        .find(|&position| ability.ability(position).is_enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Traversal;

    fn only(hits: &'static [usize]) -> impl Fn(usize) -> Ability {
        move |i| Ability::from(hits.contains(&i))
    }

    #[test]
    fn next_returns_smallest_enabled_after_from() {
        let space = ListSpace::new(10);
        let ability = only(&[3, 6]);
        assert_eq!(to_next_eligible(&space, Some(0), &ability, false), Some(3));
        assert_eq!(to_next_eligible(&space, Some(3), &ability, false), Some(6));
        assert_eq!(to_next_eligible(&space, Some(6), &ability, false), None);
    }

    #[test]
    fn scanning_from_before_start_considers_position_zero() {
        let space = ListSpace::new(5);
        assert_eq!(to_next_eligible(&space, None, &Ability::Enabled, false), Some(0));
        assert_eq!(to_previous_eligible(&space, None, &Ability::Enabled, false), Some(4));
    }

    #[test]
    fn looping_wraps_up_to_and_including_from() {
        let space = ListSpace::new(10);
        let ability = only(&[3]);
        assert_eq!(to_next_eligible(&space, Some(7), &ability, true), Some(3));
        assert_eq!(to_next_eligible(&space, Some(3), &ability, true), Some(3));
        assert_eq!(to_previous_eligible(&space, Some(2), &ability, true), Some(3));
        assert_eq!(to_previous_eligible(&space, Some(3), &ability, true), Some(3));
        assert_eq!(to_next_eligible(&space, Some(7), &Ability::Disabled, true), None);
    }

    #[test]
    fn out_of_range_from_is_allowed() {
        let space = ListSpace::new(4);
        assert_eq!(to_next_eligible(&space, Some(9), &Ability::Enabled, false), None);
        assert_eq!(to_next_eligible(&space, Some(9), &Ability::Enabled, true), Some(0));
        assert_eq!(to_previous_eligible(&space, Some(9), &Ability::Enabled, false), Some(3));
    }

    #[test]
    fn matches_brute_force_on_every_start() {
        let space = ListSpace::new(8);
        let ability = only(&[1, 4, 5]);
        let enabled = |i: usize| [1, 4, 5].contains(&i);
        for from in 0..10 {
            let forward = (from + 1..8).find(|&i| enabled(i));
            assert_eq!(to_next_eligible(&space, Some(from), &ability, false), forward);
            let wrapped = forward.or_else(|| (0..=from.min(7)).find(|&i| enabled(i)));
            assert_eq!(to_next_eligible(&space, Some(from), &ability, true), wrapped);
            let backward = (0..from.min(8)).rev().find(|&i| enabled(i));
            assert_eq!(to_previous_eligible(&space, Some(from), &ability, false), backward);
            let wrapped_back = backward.or_else(|| (from.min(8)..8).rev().find(|&i| enabled(i)));
            assert_eq!(to_previous_eligible(&space, Some(from), &ability, true), wrapped_back);
        }
    }

    #[test]
    fn plane_follows_traversal_policy() {
        let rows = PlaneSpace::new([2, 2]);
        let columns = rows.clone().with_traversal(Traversal::ColumnMajor);
        let from = Some(PlanePosition::new(0, 0));
        assert_eq!(
            to_next_eligible(&rows, from, &Ability::Enabled, false),
            Some(PlanePosition::new(0, 1))
        );
        assert_eq!(
            to_next_eligible(&columns, from, &Ability::Enabled, false),
            Some(PlanePosition::new(1, 0))
        );
    }

    #[test]
    fn column_major_scans_agree_with_traversal_order() {
        let space = PlaneSpace::new([3, 1, 0, 2]).with_traversal(Traversal::ColumnMajor);
        let order: alloc::vec::Vec<_> =
            (0..space.len()).filter_map(|i| space.position_at(i)).collect();
        let ability = |p: PlanePosition| Ability::from(p.row != 1 && p != PlanePosition::new(3, 1));
        let enabled = |p: &&PlanePosition| ability(**p).is_enabled();
        for (i, &from) in order.iter().enumerate() {
            let forward = order[i + 1..].iter().find(enabled).copied();
            assert_eq!(to_next_eligible(&space, Some(from), &ability, false), forward);
            let wrapped = forward.or_else(|| order[..=i].iter().find(enabled).copied());
            assert_eq!(to_next_eligible(&space, Some(from), &ability, true), wrapped);
            let backward = order[..i].iter().rev().find(enabled).copied();
            assert_eq!(to_previous_eligible(&space, Some(from), &ability, false), backward);
            let wrapped_back = backward.or_else(|| order[i..].iter().rev().find(enabled).copied());
            assert_eq!(to_previous_eligible(&space, Some(from), &ability, true), wrapped_back);
        }
    }

    #[test]
    fn row_and_column_scans_stay_in_their_line() {
        let space = PlaneSpace::new([3, 1, 3]);
        let ability = |p: PlanePosition| Ability::from(p != PlanePosition::new(0, 1));
        assert_eq!(
            to_next_eligible_in_row(&space, 0, Some(0), &ability, false),
            Some(PlanePosition::new(0, 2))
        );
        assert_eq!(to_next_eligible_in_row(&space, 0, Some(2), &ability, false), None);
        assert_eq!(
            to_previous_eligible_in_row(&space, 0, Some(0), &ability, true),
            Some(PlanePosition::new(0, 2))
        );
        // Row 1 has no column 2, so the column scan jumps straight to row 2.
        assert_eq!(
            to_next_eligible_in_column(&space, 2, Some(0), &ability, false),
            Some(PlanePosition::new(2, 2))
        );
        assert_eq!(
            to_previous_eligible_in_column(&space, 0, None, &ability, false),
            Some(PlanePosition::new(2, 0))
        );
    }
}
