// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered, duplicate-free selection of positions.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use smallvec::SmallVec;

use crate::ability::AbilitySource;
use crate::remap::Remap;
use crate::space::Space;

/// How a pick interacts with the existing selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Replace {
    /// Add new positions after the existing picks.
    #[default]
    Never,
    /// Replace the whole selection with the picked positions.
    All,
    /// Keep the selection size by dropping the oldest picks.
    Fifo,
    /// Keep the selection size by dropping the newest existing picks.
    Lifo,
}

/// Options for [`Pickable::pick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PickOptions {
    /// Replacement policy.
    pub replace: Replace,
}

impl PickOptions {
    /// Options that replace the whole selection.
    #[must_use]
    pub const fn replacing() -> Self {
        Self {
            replace: Replace::All,
        }
    }
}

/// Last kind of mutation applied to a [`Pickable`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PickStatus {
    /// Nothing has been picked or omitted yet.
    #[default]
    Ready,
    /// The last mutation was a pick.
    Picked,
    /// The last mutation was an omit.
    Omitted,
}

/// Ordered selection state.
///
/// Picks are unique and kept in first-insertion order. Mutation happens only
/// through [`pick`](Self::pick), [`omit`](Self::omit), [`toggle`](Self::toggle)
/// and the reconciliation routines.
#[derive(Clone, Debug)]
pub struct Pickable<P> {
    picks: SmallVec<[P; 4]>,
    status: PickStatus,
}

impl<P> Default for Pickable<P> {
    fn default() -> Self {
        Self {
            picks: SmallVec::new(),
            status: PickStatus::Ready,
        }
    }
}

impl<P> Pickable<P>
where
    P: Copy + Eq + Hash + Debug,
{
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current picks, oldest first.
    #[must_use]
    pub fn picks(&self) -> &[P] {
        &self.picks
    }

    /// Last kind of mutation.
    #[must_use]
    pub const fn status(&self) -> PickStatus {
        self.status
    }

    /// Returns `true` if `position` is picked.
    #[must_use]
    pub fn is_picked(&self, position: P) -> bool {
        self.picks.contains(&position)
    }

    /// Returns `true` if more than one position is picked.
    #[must_use]
    pub fn multiple(&self) -> bool {
        self.picks.len() > 1
    }

    /// Most recently inserted pick.
    #[must_use]
    pub fn newest(&self) -> Option<P> {
        self.picks.last().copied()
    }

    /// Earliest inserted pick.
    #[must_use]
    pub fn oldest(&self) -> Option<P> {
        self.picks.first().copied()
    }

    /// Smallest pick.
    #[must_use]
    pub fn first(&self) -> Option<P>
    where
        P: Ord,
    {
        self.picks.iter().min().copied()
    }

    /// Largest pick.
    #[must_use]
    pub fn last(&self) -> Option<P>
    where
        P: Ord,
    {
        self.picks.iter().max().copied()
    }

    /// Picks `positions`.
    ///
    /// Positions already picked are not inserted again, so picking is
    /// idempotent under [`Replace::Never`].
    pub fn pick(&mut self, positions: impl IntoIterator<Item = P>, options: PickOptions) {
        let mut incoming: SmallVec<[P; 4]> = SmallVec::new();
        for position in positions {
            if !incoming.contains(&position) {
                incoming.push(position);
            }
        }
        self.status = PickStatus::Picked;

        if options.replace == Replace::All {
            self.picks = incoming;
            return;
        }

        let fresh: SmallVec<[P; 4]> = incoming
            .into_iter()
            .filter(|position| !self.picks.contains(position))
            .collect();
        let count = self.picks.len();
        match options.replace {
            Replace::Never | Replace::All => self.picks.extend(fresh),
            Replace::Fifo => {
                self.picks.extend(fresh);
                if count > 0 && self.picks.len() > count {
                    let excess = self.picks.len() - count;
                    self.picks.drain(..excess);
                }
            }
            Replace::Lifo => {
                if count > 0 {
                    self.picks.truncate(count.saturating_sub(fresh.len()));
                }
                self.picks.extend(fresh);
            }
        }
    }

    /// Picks a single position, appending it to the selection.
    pub fn pick_one(&mut self, position: P) {
        self.pick([position], PickOptions::default());
    }

    /// Omits `position`, or every pick when `position` is `None`.
    pub fn omit(&mut self, position: Option<P>) {
        match position {
            Some(position) => self.picks.retain(|p| *p != position),
            None => self.picks.clear(),
        }
        self.status = PickStatus::Omitted;
    }

    /// Picks `position` if it is not picked, otherwise omits it.
    pub fn toggle(&mut self, position: P) {
        if self.is_picked(position) {
            self.omit(Some(position));
        } else {
            self.pick_one(position);
        }
    }

    /// Follows each pick to its new position, dropping removed items.
    ///
    /// Surviving picks keep their relative order. If two picks land on the same
    /// new position, the earlier one is kept. Returns the number of dropped picks.
    pub fn reconcile(&mut self, remap: &Remap<P>) -> usize {
        let before = self.picks.len();
        let mut next: SmallVec<[P; 4]> = SmallVec::with_capacity(before);
        for position in self.picks.iter().filter_map(|&p| remap.get(p)) {
            if !next.contains(&position) {
                next.push(position);
            }
        }
        self.picks = next;
        let dropped = before - self.picks.len();
        if dropped > 0 {
            log::debug!("reconcile dropped {dropped} of {before} picks");
        }
        dropped
    }

    /// Drops picks that fall outside `space`. Returns the number dropped.
    pub fn retain_in<S>(&mut self, space: &S) -> usize
    where
        S: Space<Position = P> + ?Sized,
    {
        self.retain_where(|p| space.contains(p))
    }

    /// Drops picks that are out of bounds or no longer enabled.
    ///
    /// Run this after the ability source changes. Returns the number dropped.
    pub fn retain_eligible<S, A>(&mut self, space: &S, ability: &A) -> usize
    where
        S: Space<Position = P> + ?Sized,
        A: AbilitySource<P> + ?Sized,
    {
        let dropped = self.retain_where(|p| space.contains(p) && ability.ability(p).is_enabled());
        if dropped > 0 {
            log::debug!("dropped {dropped} picks that became ineligible");
        }
        dropped
    }

    /// Snapshot of the picks as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<P> {
        self.picks.to_vec()
    }

    fn retain_where(&mut self, mut keep: impl FnMut(P) -> bool) -> usize {
        let before = self.picks.len();
        self.picks.retain(|p| keep(*p));
        before - self.picks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::Ability;
    use crate::space::ListSpace;

    #[test]
    fn pick_is_idempotent_and_ordered() {
        let mut pickable = Pickable::new();
        pickable.pick([4, 1, 4], PickOptions::default());
        pickable.pick_one(1);
        pickable.pick_one(7);
        assert_eq!(pickable.picks(), &[4, 1, 7]);
        assert_eq!(pickable.oldest(), Some(4));
        assert_eq!(pickable.newest(), Some(7));
        assert_eq!(pickable.first(), Some(1));
        assert_eq!(pickable.last(), Some(7));
        assert!(pickable.multiple());
        assert_eq!(pickable.status(), PickStatus::Picked);
    }

    #[test]
    fn omit_and_toggle() {
        let mut pickable = Pickable::new();
        pickable.pick([0, 1, 2], PickOptions::default());
        pickable.omit(Some(1));
        assert_eq!(pickable.picks(), &[0, 2]);
        pickable.toggle(0);
        pickable.toggle(5);
        assert_eq!(pickable.picks(), &[2, 5]);
        pickable.omit(None);
        assert!(pickable.picks().is_empty());
        assert_eq!(pickable.status(), PickStatus::Omitted);
    }

    #[test]
    fn replacement_policies() {
        let mut all = Pickable::new();
        all.pick([0, 1], PickOptions::default());
        all.pick([3, 1], PickOptions::replacing());
        assert_eq!(all.picks(), &[3, 1]);

        let mut fifo = Pickable::new();
        fifo.pick([0, 1, 2], PickOptions::default());
        fifo.pick([5, 6], PickOptions { replace: Replace::Fifo });
        assert_eq!(fifo.picks(), &[2, 5, 6]);

        let mut lifo = Pickable::new();
        lifo.pick([0, 1, 2], PickOptions::default());
        lifo.pick([5], PickOptions { replace: Replace::Lifo });
        assert_eq!(lifo.picks(), &[0, 1, 5]);

        // An empty selection simply takes the new picks.
        let mut empty = Pickable::new();
        empty.pick([8, 9], PickOptions { replace: Replace::Fifo });
        assert_eq!(empty.picks(), &[8, 9]);
    }

    #[test]
    fn reconcile_follows_identity() {
        let mut pickable = Pickable::new();
        pickable.pick_one(0);
        let reversed: Remap<usize> = (0..10).map(|i| (i, 9 - i)).collect();
        assert_eq!(pickable.reconcile(&reversed), 0);
        assert_eq!(pickable.picks(), &[9]);
    }

    #[test]
    fn reconcile_drops_removed_items() {
        let mut pickable = Pickable::new();
        pickable.pick([9, 2], PickOptions::default());
        // Shrinking from 10 to 9 removes the item at 9.
        let shrunk: Remap<usize> = (0..9).map(|i| (i, i)).collect();
        assert_eq!(pickable.reconcile(&shrunk), 1);
        assert_eq!(pickable.picks(), &[2]);
    }

    #[test]
    fn retain_eligible_drops_disabled_and_out_of_bounds() {
        let mut pickable = Pickable::new();
        pickable.pick([1, 2, 8], PickOptions::default());
        let ability = |i: usize| Ability::from(i != 2);
        assert_eq!(pickable.retain_eligible(&ListSpace::new(5), &ability), 2);
        assert_eq!(pickable.picks(), &[1]);
    }
}
