// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-position eligibility: constant, functional, or subscribable sources.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::remap::Remap;

/// Eligibility of an in-bounds position.
///
/// The third outcome, "no opinion", is expressed as `Option::<Ability>::None`
/// and only ever means the position is outside the current bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ability {
    /// The position may be picked or navigated to by eligible operations.
    Enabled,
    /// The position is in bounds but excluded from eligible operations.
    Disabled,
}

impl Ability {
    /// Returns `true` for [`Ability::Enabled`].
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for Ability {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// Resolves the [`Ability`] of a position.
///
/// Callers only consult a source for positions inside the current space, so
/// implementations never need to reason about bounds.
pub trait AbilitySource<P> {
    /// Ability of `position`.
    fn ability(&self, position: P) -> Ability;

    /// Moves position-keyed state through a structural change.
    ///
    /// Called by [`EligiblePicker::restructure`](crate::EligiblePicker::restructure)
    /// before picks are checked against the new layout. Sources that compute
    /// ability from the position alone keep the default, which does nothing.
    fn reconcile(&mut self, _remap: &Remap<P>)
    where
        P: Eq + Hash,
    {
    }
}

impl<P> AbilitySource<P> for Ability {
    fn ability(&self, _position: P) -> Ability {
        *self
    }
}

impl<P, F> AbilitySource<P> for F
where
    F: Fn(P) -> Ability,
{
    fn ability(&self, position: P) -> Ability {
        self(position)
    }
}

/// Handle returned by [`AbilityStore::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Notification delivered to [`AbilityStore`] subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbilityChange<'a, P> {
    /// The effective ability of these positions changed.
    Positions {
        /// Store revision after the change.
        revision: u64,
        /// Positions whose ability flipped.
        positions: &'a [P],
    },
    /// The default ability changed, so any position may have flipped.
    All {
        /// Store revision after the change.
        revision: u64,
    },
}

type Subscriber<P> = Box<dyn FnMut(&AbilityChange<'_, P>)>;

/// A subscribable ability source.
///
/// Holds a default ability plus per-position overrides. Every mutation that
/// changes an effective ability bumps [`AbilityStore::revision`] and notifies
/// subscribers synchronously, before the mutating call returns.
///
/// Subscriptions are for host-side observers. A picker never subscribes to the
/// store it owns: mutate it through
/// [`EligiblePicker::update_ability`](crate::EligiblePicker::update_ability) so
/// that newly disabled picks are dropped. Overrides follow their items through
/// [`EligiblePicker::restructure`](crate::EligiblePicker::restructure).
///
/// ```rust
/// use core::cell::Cell;
/// use std::rc::Rc;
/// use wayfind_eligible::{Ability, AbilitySource, AbilityStore};
///
/// let mut store: AbilityStore<usize> = AbilityStore::new(Ability::Enabled);
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// store.subscribe(move |_| counter.set(counter.get() + 1));
///
/// store.set(2, Ability::Disabled);
/// // Setting the same value again is not a change.
/// store.set(2, Ability::Disabled);
///
/// assert_eq!(store.ability(2), Ability::Disabled);
/// assert_eq!(seen.get(), 1);
/// ```
pub struct AbilityStore<P> {
    default: Ability,
    overrides: HashMap<P, Ability>,
    revision: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<P>)>,
}

impl<P: fmt::Debug> fmt::Debug for AbilityStore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbilityStore")
            .field("default", &self.default)
            .field("overrides", &self.overrides)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<P> Default for AbilityStore<P>
where
    P: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new(Ability::Enabled)
    }
}

impl<P> AbilityStore<P>
where
    P: Copy + Eq + Hash,
{
    /// Creates a store where every position starts with `default`.
    #[must_use]
    pub fn new(default: Ability) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
            revision: 0,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    /// Monotonic counter bumped on every effective change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Ability every position has unless overridden.
    #[must_use]
    pub const fn default_ability(&self) -> Ability {
        self.default
    }

    /// Sets the ability of one position. Returns `true` if it changed.
    pub fn set(&mut self, position: P, ability: Ability) -> bool {
        let changed = self.write(position, ability);
        if changed {
            self.publish(&[position]);
        }
        changed
    }

    /// Sets several positions at once, notifying subscribers a single time.
    pub fn set_many(&mut self, entries: impl IntoIterator<Item = (P, Ability)>) -> usize {
        let changed: Vec<P> = entries
            .into_iter()
            .filter_map(|(position, ability)| self.write(position, ability).then_some(position))
            .collect();
        if !changed.is_empty() {
            self.publish(&changed);
        }
        changed.len()
    }

    /// Drops the override for `position`, reverting it to the default.
    pub fn clear(&mut self, position: P) -> bool {
        let default = self.default;
        self.set(position, default)
    }

    /// Changes the default ability and drops every override.
    pub fn reset(&mut self, default: Ability) {
        let had_overrides = !self.overrides.is_empty();
        self.overrides.clear();
        if had_overrides || default != self.default {
            self.default = default;
            self.revision += 1;
            let change = AbilityChange::All {
                revision: self.revision,
            };
            self.notify(&change);
        }
    }

    /// Registers `callback` to run after every effective change.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&AbilityChange<'_, P>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn effective(&self, position: P) -> Ability {
        self.overrides.get(&position).copied().unwrap_or(self.default)
    }

    fn write(&mut self, position: P, ability: Ability) -> bool {
        let before = self.effective(position);
        if ability == self.default {
            self.overrides.remove(&position);
        } else {
            self.overrides.insert(position, ability);
        }
        before != ability
    }

    fn publish(&mut self, positions: &[P]) {
        self.revision += 1;
        let change = AbilityChange::Positions {
            revision: self.revision,
            positions,
        };
        self.notify(&change);
    }

    fn notify(&mut self, change: &AbilityChange<'_, P>) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(change);
        }
    }
}

impl<P> AbilitySource<P> for AbilityStore<P>
where
    P: Copy + Eq + Hash,
{
    fn ability(&self, position: P) -> Ability {
        self.effective(position)
    }

    /// Re-keys overrides to their new positions and drops removed ones.
    ///
    /// Subscribers see a single [`AbilityChange::All`].
    fn reconcile(&mut self, remap: &Remap<P>)
    where
        P: Eq + Hash,
    {
        if self.overrides.is_empty() {
            return;
        }
        let before = self.overrides.len();
        self.overrides = self
            .overrides
            .drain()
            .filter_map(|(position, ability)| remap.get(position).map(|to| (to, ability)))
            .collect();
        let dropped = before - self.overrides.len();
        if dropped > 0 {
            log::debug!("dropped {dropped} ability overrides for removed positions");
        }
        self.revision += 1;
        let change = AbilityChange::All {
            revision: self.revision,
        };
        self.notify(&change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn constant_and_function_sources() {
        assert_eq!(AbilitySource::<usize>::ability(&Ability::Disabled, 7), Ability::Disabled);
        let odd = |i: usize| Ability::from(i % 2 == 1);
        assert_eq!(odd.ability(3), Ability::Enabled);
        assert_eq!(odd.ability(4), Ability::Disabled);
    }

    #[test]
    fn store_notifies_only_on_effective_change() {
        let log: Rc<RefCell<Vec<u64>>> = Rc::default();
        let sink = Rc::clone(&log);
        let mut store = AbilityStore::<usize>::new(Ability::Enabled);
        store.subscribe(move |change| {
            let revision = match change {
                AbilityChange::Positions { revision, .. } | AbilityChange::All { revision } => {
                    *revision
                }
            };
            sink.borrow_mut().push(revision);
        });

        assert!(store.set(1, Ability::Disabled));
        assert!(!store.set(1, Ability::Disabled));
        assert_eq!(store.set_many([(2, Ability::Disabled), (3, Ability::Enabled)]), 1);
        assert!(store.clear(1));
        store.reset(Ability::Enabled);

        assert_eq!(*log.borrow(), vec![1, 2, 3, 4]);
        assert_eq!(store.revision(), 4);
        assert_eq!(store.ability(2), Ability::Enabled);
    }

    #[test]
    fn reconcile_moves_overrides_with_their_items() {
        let changes: Rc<RefCell<usize>> = Rc::default();
        let sink = Rc::clone(&changes);
        let mut store = AbilityStore::<usize>::new(Ability::Enabled);
        store.set_many([(1, Ability::Disabled), (2, Ability::Disabled)]);
        store.subscribe(move |change| {
            assert!(matches!(change, AbilityChange::All { .. }), "{change:?}");
            *sink.borrow_mut() += 1;
        });

        // [a, b, c] becomes [b, a]: b moves to 0 and c is removed.
        let remap = Remap::between(&['a', 'b', 'c'], &['b', 'a']);
        store.reconcile(&remap);
        assert_eq!(store.ability(0), Ability::Disabled);
        assert_eq!(store.ability(1), Ability::Enabled);
        assert_eq!(store.ability(2), Ability::Enabled);
        assert_eq!(*changes.borrow(), 1);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let hits: Rc<RefCell<usize>> = Rc::default();
        let sink = Rc::clone(&hits);
        let mut store = AbilityStore::<usize>::default();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.set(0, Ability::Disabled);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(0, Ability::Enabled);
        assert_eq!(*hits.borrow(), 1);
    }
}
