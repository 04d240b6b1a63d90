// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single cursor over an index space.

use core::fmt::Debug;
use core::hash::Hash;

use rand::Rng;

use crate::remap::Remap;
use crate::space::Space;

/// Options for [`Navigateable::next`] and [`Navigateable::previous`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Wrap around at either end instead of stopping there.
    pub loops: bool,
    /// Number of positions to move. Zero is treated as one.
    pub distance: usize,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            loops: true,
            distance: 1,
        }
    }
}

/// Cursor state: one optional location.
///
/// Every movement takes the current space so the location always stays within
/// the current bounds. Movements ignore ability; see
/// [`EligiblePicker`](crate::EligiblePicker) for eligible movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigateable<P> {
    location: Option<P>,
}

impl<P> Default for Navigateable<P> {
    fn default() -> Self {
        Self { location: None }
    }
}

impl<P> Navigateable<P>
where
    P: Copy + Eq + Hash + Debug,
{
    /// Creates a cursor with no location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current location.
    #[must_use]
    pub const fn location(&self) -> Option<P> {
        self.location
    }

    /// Clears the location.
    pub fn reset(&mut self) {
        self.location = None;
    }

    /// Moves to `position`, or to `None` if it is out of bounds.
    pub fn exact<S>(&mut self, space: &S, position: P) -> Option<P>
    where
        S: Space<Position = P> + ?Sized,
    {
        self.location = space.contains(position).then_some(position);
        self.location
    }

    /// Moves to the first position.
    pub fn first<S>(&mut self, space: &S) -> Option<P>
    where
        S: Space<Position = P> + ?Sized,
    {
        self.location = space.first();
        self.location
    }

    /// Moves to the last position.
    pub fn last<S>(&mut self, space: &S) -> Option<P>
    where
        S: Space<Position = P> + ?Sized,
    {
        self.location = space.last();
        self.location
    }

    /// Moves forward by `options.distance`.
    ///
    /// Without a location this starts from one before the first position.
    /// Without `loops` the cursor stops at the last position.
    pub fn next<S>(&mut self, space: &S, options: NavigateOptions) -> Option<P>
    where
        S: Space<Position = P> + ?Sized,
    {
        let len = space.len();
        if len == 0 {
            self.location = None;
            return None;
        }
        let distance = options.distance.max(1);
        let ordinal = match (self.current_ordinal(space), options.loops) {
            (Some(ordinal), true) => (ordinal + distance % len) % len,
            (Some(ordinal), false) => ordinal.saturating_add(distance).min(len - 1),
            (None, true) => (distance - 1) % len,
            (None, false) => (distance - 1).min(len - 1),
        };
        self.location = space.position_at(ordinal);
        self.location
    }

    /// Moves backward by `options.distance`.
    ///
    /// Without a location this starts from one past the last position.
    /// Without `loops` the cursor stops at the first position.
    pub fn previous<S>(&mut self, space: &S, options: NavigateOptions) -> Option<P>
    where
        S: Space<Position = P> + ?Sized,
    {
        let len = space.len();
        if len == 0 {
            self.location = None;
            return None;
        }
        let distance = options.distance.max(1);
        let back = self.current_ordinal(space).unwrap_or(len);
        let ordinal = if distance <= back {
            back - distance
        } else if options.loops {
            match (distance - back) % len {
                0 => 0,
                short => len - short,
            }
        } else {
            0
        };
        self.location = space.position_at(ordinal);
        self.location
    }

    /// Moves to a uniformly random position.
    pub fn random<S, R>(&mut self, space: &S, rng: &mut R) -> Option<P>
    where
        S: Space<Position = P> + ?Sized,
        R: Rng + ?Sized,
    {
        let len = space.len();
        self.location = if len == 0 {
            None
        } else {
            space.position_at(rng.gen_range(0..len))
        };
        self.location
    }

    /// Follows the location to its new position, or resets it if removed.
    pub fn reconcile(&mut self, remap: &Remap<P>) {
        if let Some(location) = self.location {
            self.location = remap.get(location);
            if self.location.is_none() {
                log::debug!("location {location:?} was removed; resetting");
            }
        }
    }

    /// Resets the location if it fell outside `space`.
    pub fn retain_in<S>(&mut self, space: &S)
    where
        S: Space<Position = P> + ?Sized,
    {
        if self.location.is_some_and(|p| !space.contains(p)) {
            self.location = None;
        }
    }

    pub(crate) fn set(&mut self, location: Option<P>) {
        self.location = location;
    }

    fn current_ordinal<S>(&self, space: &S) -> Option<usize>
    where
        S: Space<Position = P> + ?Sized,
    {
        self.location.and_then(|p| space.ordinal_of(p))
    }
}
