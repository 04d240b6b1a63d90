// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eligible picking: selection and navigation that honor an ability source.

use alloc::vec::Vec;

use rand::Rng;

use crate::ability::{Ability, AbilitySource};
use crate::navigateable::Navigateable;
use crate::pickable::{PickOptions, Pickable};
use crate::remap::Remap;
use crate::scan;
use crate::space::{PlanePosition, PlaneSpace, Space};

/// Selection plus cursor over a space, restricted to eligible positions.
///
/// Picking implies navigating: every successful pick also moves the location to
/// the picked position. Operations return the resulting [`Ability`], with
/// `None` meaning the position was out of bounds or no eligible position was
/// found. Only `Some(Ability::Enabled)` results mutate state.
#[derive(Clone, Debug)]
pub struct EligiblePicker<S: Space, A> {
    space: S,
    ability: A,
    pickable: Pickable<S::Position>,
    navigateable: Navigateable<S::Position>,
    loops: bool,
    pick_options: PickOptions,
}

impl<S, A> EligiblePicker<S, A>
where
    S: Space,
    A: AbilitySource<S::Position>,
{
    /// Creates a picker with no picks, no location, and non-looping scans.
    pub fn new(space: S, ability: A) -> Self {
        Self {
            space,
            ability,
            pickable: Pickable::new(),
            navigateable: Navigateable::new(),
            loops: false,
            pick_options: PickOptions::default(),
        }
    }

    /// Returns this picker with scans that wrap around (or not).
    #[must_use]
    pub fn with_loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Returns this picker with a different replacement policy for picks.
    #[must_use]
    pub fn with_pick_options(mut self, options: PickOptions) -> Self {
        self.pick_options = options;
        self
    }

    /// Sets whether scans wrap around.
    pub fn set_loops(&mut self, loops: bool) {
        self.loops = loops;
    }

    /// Whether scans wrap around.
    #[must_use]
    pub const fn loops(&self) -> bool {
        self.loops
    }

    /// Current space.
    pub fn space(&self) -> &S {
        &self.space
    }

    /// Current ability source.
    pub fn ability_source(&self) -> &A {
        &self.ability
    }

    /// Selection state.
    pub fn pickable(&self) -> &Pickable<S::Position> {
        &self.pickable
    }

    /// Cursor state.
    pub fn navigateable(&self) -> &Navigateable<S::Position> {
        &self.navigateable
    }

    /// Current picks, oldest first.
    pub fn picks(&self) -> &[S::Position] {
        self.pickable.picks()
    }

    /// Current location.
    pub fn location(&self) -> Option<S::Position> {
        self.navigateable.location()
    }

    /// Ability of `position`, or `None` if it is out of bounds.
    pub fn ability(&self, position: S::Position) -> Option<Ability> {
        self.space
            .contains(position)
            .then(|| self.ability.ability(position))
    }

    /// Picks and moves to `position` if it is enabled.
    pub fn exact(&mut self, position: S::Position) -> Option<Ability> {
        let ability = self.ability(position)?;
        if ability.is_enabled() {
            self.commit(position);
        }
        Some(ability)
    }

    /// Picks every enabled position among `positions`.
    ///
    /// The location moves to the last enabled position. Returns `Enabled` if
    /// anything was picked, `Disabled` if every in-bounds position was
    /// disabled, and `None` if nothing was in bounds.
    pub fn exact_many(
        &mut self,
        positions: impl IntoIterator<Item = S::Position>,
    ) -> Option<Ability> {
        let mut in_bounds = false;
        let mut eligible: Vec<S::Position> = Vec::new();
        for position in positions {
            match self.ability(position) {
                Some(Ability::Enabled) => {
                    in_bounds = true;
                    eligible.push(position);
                }
                Some(Ability::Disabled) => in_bounds = true,
                None => {}
            }
        }
        let Some(&last) = eligible.last() else {
            return in_bounds.then_some(Ability::Disabled);
        };
        self.pickable.pick(eligible, self.pick_options);
        self.navigateable.set(Some(last));
        Some(Ability::Enabled)
    }

    /// Picks the first eligible position after `from`.
    pub fn next(&mut self, from: Option<S::Position>) -> Option<Ability> {
        let hit = scan::to_next_eligible(&self.space, from, &self.ability, self.loops)?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the first eligible position before `from`.
    pub fn previous(&mut self, from: Option<S::Position>) -> Option<Ability> {
        let hit = scan::to_previous_eligible(&self.space, from, &self.ability, self.loops)?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the first eligible position in traversal order.
    pub fn first(&mut self) -> Option<Ability> {
        self.next(None)
    }

    /// Picks the last eligible position in traversal order.
    pub fn last(&mut self) -> Option<Ability> {
        self.previous(None)
    }

    /// Picks a uniformly random eligible position.
    pub fn random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Ability> {
        let hit = self.random_eligible(rng)?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Moves the location to `position` if it is enabled, without picking.
    pub fn navigate_exact(&mut self, position: S::Position) -> Option<Ability> {
        let ability = self.ability(position)?;
        if ability.is_enabled() {
            self.navigateable.set(Some(position));
        }
        Some(ability)
    }

    /// Moves the location to the first eligible position after `from`.
    pub fn navigate_next(&mut self, from: Option<S::Position>) -> Option<Ability> {
        let hit = scan::to_next_eligible(&self.space, from, &self.ability, self.loops)?;
        self.navigateable.set(Some(hit));
        Some(Ability::Enabled)
    }

    /// Moves the location to the first eligible position before `from`.
    pub fn navigate_previous(&mut self, from: Option<S::Position>) -> Option<Ability> {
        let hit = scan::to_previous_eligible(&self.space, from, &self.ability, self.loops)?;
        self.navigateable.set(Some(hit));
        Some(Ability::Enabled)
    }

    /// Moves the location to the first eligible position.
    pub fn navigate_first(&mut self) -> Option<Ability> {
        self.navigate_next(None)
    }

    /// Moves the location to the last eligible position.
    pub fn navigate_last(&mut self) -> Option<Ability> {
        self.navigate_previous(None)
    }

    /// Moves the location to a uniformly random eligible position.
    pub fn navigate_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Ability> {
        let hit = self.random_eligible(rng)?;
        self.navigateable.set(Some(hit));
        Some(Ability::Enabled)
    }

    /// Omits `position`, or every pick when `position` is `None`.
    pub fn omit(&mut self, position: Option<S::Position>) {
        self.pickable.omit(position);
    }

    /// Replaces the space after a structural change.
    ///
    /// Picks, location and position-keyed ability follow their items through
    /// `remap`. Anything removed, left outside the new bounds, or no longer
    /// enabled at its new position is dropped from the picks.
    pub fn restructure(&mut self, space: S, remap: &Remap<S::Position>) {
        self.space = space;
        self.ability.reconcile(remap);
        self.pickable.reconcile(remap);
        self.navigateable.reconcile(remap);
        self.enforce_bounds();
        self.sync_ability();
    }

    /// Replaces the space when items kept their positions (append or truncate).
    pub fn resize(&mut self, space: S) {
        self.space = space;
        self.enforce_bounds();
    }

    /// Drops picks whose ability no longer resolves to enabled.
    ///
    /// Returns the number of dropped picks. The location is left in place.
    pub fn sync_ability(&mut self) -> usize {
        self.pickable.retain_eligible(&self.space, &self.ability)
    }

    /// Mutates the ability source, then reconciles picks against it.
    pub fn update_ability(&mut self, update: impl FnOnce(&mut A)) -> usize {
        update(&mut self.ability);
        self.sync_ability()
    }

    fn commit(&mut self, position: S::Position) {
        self.pickable.pick([position], self.pick_options);
        self.navigateable.set(Some(position));
    }

    fn enforce_bounds(&mut self) {
        let dropped = self.pickable.retain_in(&self.space);
        if dropped > 0 {
            log::debug!("dropped {dropped} picks outside the new bounds");
        }
        self.navigateable.retain_in(&self.space);
    }

    fn random_eligible<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<S::Position> {
        let eligible: Vec<S::Position> = (0..self.space.len())
            .filter_map(|ordinal| self.space.position_at(ordinal))
            .filter(|&p| self.ability.ability(p).is_enabled())
            .collect();
        if eligible.is_empty() {
            return None;
        }
        Some(eligible[rng.gen_range(0..eligible.len())])
    }
}

impl<A> EligiblePicker<PlaneSpace, A>
where
    A: AbilitySource<PlanePosition>,
{
    /// Picks the next eligible cell in the same row as `from`.
    pub fn next_in_row(&mut self, from: PlanePosition) -> Option<Ability> {
        let hit = scan::to_next_eligible_in_row(
            &self.space,
            from.row,
            Some(from.column),
            &self.ability,
            self.loops,
        )?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the previous eligible cell in the same row as `from`.
    pub fn previous_in_row(&mut self, from: PlanePosition) -> Option<Ability> {
        let hit = scan::to_previous_eligible_in_row(
            &self.space,
            from.row,
            Some(from.column),
            &self.ability,
            self.loops,
        )?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the next eligible cell in the same column as `from`.
    pub fn next_in_column(&mut self, from: PlanePosition) -> Option<Ability> {
        let hit = scan::to_next_eligible_in_column(
            &self.space,
            from.column,
            Some(from.row),
            &self.ability,
            self.loops,
        )?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the previous eligible cell in the same column as `from`.
    pub fn previous_in_column(&mut self, from: PlanePosition) -> Option<Ability> {
        let hit = scan::to_previous_eligible_in_column(
            &self.space,
            from.column,
            Some(from.row),
            &self.ability,
            self.loops,
        )?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the first eligible cell of `row`.
    pub fn first_in_row(&mut self, row: usize) -> Option<Ability> {
        let hit = scan::to_next_eligible_in_row(&self.space, row, None, &self.ability, false)?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the last eligible cell of `row`.
    pub fn last_in_row(&mut self, row: usize) -> Option<Ability> {
        let hit = scan::to_previous_eligible_in_row(&self.space, row, None, &self.ability, false)?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the first eligible cell of `column`.
    pub fn first_in_column(&mut self, column: usize) -> Option<Ability> {
        let hit =
            scan::to_next_eligible_in_column(&self.space, column, None, &self.ability, false)?;
        self.commit(hit);
        Some(Ability::Enabled)
    }

    /// Picks the last eligible cell of `column`.
    pub fn last_in_column(&mut self, column: usize) -> Option<Ability> {
        let hit =
            scan::to_previous_eligible_in_column(&self.space, column, None, &self.ability, false)?;
        self.commit(hit);
        Some(Ability::Enabled)
    }
}
