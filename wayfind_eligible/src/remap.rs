// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity-keyed position remaps delivered after structural changes.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::space::PlanePosition;

/// Maps old positions to new positions after the backing collection changes.
///
/// A position with no entry is treated as removed. Hosts usually keep their own
/// position-to-identity bookkeeping and either fill a remap directly or build
/// one from identity token sequences with [`Remap::between`] and
/// [`Remap::between_planes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Remap<P: Eq + Hash> {
    moves: HashMap<P, P>,
}

impl<P: Eq + Hash> Default for Remap<P> {
    fn default() -> Self {
        Self {
            moves: HashMap::new(),
        }
    }
}

impl<P> Remap<P>
where
    P: Copy + Eq + Hash,
{
    /// Creates an empty remap, in which every position counts as removed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the item at `old` now lives at `new`.
    pub fn insert(&mut self, old: P, new: P) {
        self.moves.insert(old, new);
    }

    /// Where the item at `old` now lives, or `None` if it was removed.
    #[must_use]
    pub fn get(&self, old: P) -> Option<P> {
        self.moves.get(&old).copied()
    }

    /// Number of surviving entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if nothing survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl<P> FromIterator<(P, P)> for Remap<P>
where
    P: Copy + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (P, P)>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Remap<usize> {
    /// Builds a list remap from the identity tokens before and after a change.
    ///
    /// Tokens missing from `new` are removed. If a token repeats in `new`, its
    /// first occurrence wins.
    ///
    /// ```rust
    /// use wayfind_eligible::Remap;
    ///
    /// let remap = Remap::between(&["a", "b", "c"], &["c", "a"]);
    /// assert_eq!(remap.get(0), Some(1));
    /// assert_eq!(remap.get(1), None);
    /// assert_eq!(remap.get(2), Some(0));
    /// ```
    pub fn between<K: Eq + Hash>(old: &[K], new: &[K]) -> Self {
        let mut placed: HashMap<&K, usize> = HashMap::with_capacity(new.len());
        for (index, token) in new.iter().enumerate() {
            placed.entry(token).or_insert(index);
        }
        old.iter()
            .enumerate()
            .filter_map(|(index, token)| placed.get(token).map(|&to| (index, to)))
            .collect()
    }
}

impl Remap<PlanePosition> {
    /// Builds a plane remap from per-row identity tokens before and after a change.
    ///
    /// Items may move between rows; tokens are matched across the whole plane.
    pub fn between_planes<K, R>(old: &[R], new: &[R]) -> Self
    where
        K: Eq + Hash,
        R: AsRef<[K]>,
    {
        let mut placed: HashMap<&K, PlanePosition> = HashMap::new();
        for (row, tokens) in new.iter().enumerate() {
            for (column, token) in tokens.as_ref().iter().enumerate() {
                placed
                    .entry(token)
                    .or_insert(PlanePosition::new(row, column));
            }
        }
        let mut remap = Self::new();
        for (row, tokens) in old.iter().enumerate() {
            for (column, token) in tokens.as_ref().iter().enumerate() {
                if let Some(&to) = placed.get(token) {
                    remap.insert(PlanePosition::new(row, column), to);
                }
            }
        }
        remap
    }
}
