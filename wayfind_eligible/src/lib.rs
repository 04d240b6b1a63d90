// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Eligible: picking and navigation over abstract index spaces.
//!
//! This crate is the state core behind list and grid selection widgets such as
//! listboxes, tablists, menus, and grids. It knows nothing about the DOM, widgets,
//! or rendering; it works on positions and on predicates supplied by the host.
//!
//! - **Spaces** ([`Space`]): the shape of the collection. A [`ListSpace`] of
//!   `len` items, or a [`PlaneSpace`] of rows that may differ in length, walked
//!   in a configurable [`Traversal`] order.
//! - **Ability** ([`AbilitySource`]): whether a position is [`Ability::Enabled`]
//!   or [`Ability::Disabled`]. Constants, plain functions, and the subscribable
//!   [`AbilityStore`] are all sources.
//! - **Scanning** ([`to_next_eligible`] / [`to_previous_eligible`]): stateless
//!   directional search for eligible positions, with optional wraparound.
//! - **State machines**: [`Pickable`] (ordered, duplicate-free picks) and
//!   [`Navigateable`] (one optional location).
//! - **Eligible picking** ([`EligiblePicker`]): composes all of the above so
//!   that only eligible positions are ever picked or navigated to.
//! - **Reconciliation** ([`Remap`]): after the backing collection reorders,
//!   grows, or shrinks, picks and location follow their items by identity and
//!   are dropped when the item is gone.
//!
//! ## Minimal example
//!
//! ```rust
//! use wayfind_eligible::{Ability, EligiblePicker, ListSpace, Remap};
//!
//! // Ten options; only the fourth one is enabled.
//! let mut listbox = EligiblePicker::new(ListSpace::new(10), |i: usize| {
//!     Ability::from(i == 3)
//! });
//!
//! // Nothing eligible after 7, and scans do not wrap by default.
//! assert_eq!(listbox.next(Some(7)), None);
//! assert!(listbox.picks().is_empty());
//!
//! // Scanning from 0 finds 3, picks it, and moves the location there.
//! assert_eq!(listbox.next(Some(0)), Some(Ability::Enabled));
//! assert_eq!(listbox.picks(), &[3]);
//! assert_eq!(listbox.location(), Some(3));
//!
//! // The host reverses its items; the pick follows its item.
//! let before: Vec<u32> = (0..10).collect();
//! let after: Vec<u32> = before.iter().rev().copied().collect();
//! listbox.restructure(ListSpace::new(10), &Remap::between(&before, &after));
//! assert_eq!(listbox.picks(), &[6]);
//! ```
//!
//! ## Ability outcomes
//!
//! Operations that consult ability return `Option<Ability>`. `None` strictly
//! means "outside the current bounds" (or, for scans, "nothing eligible was
//! found"); an in-bounds position that is excluded is `Some(Ability::Disabled)`.
//! Ability sources are never asked about out-of-bounds positions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ability;
mod navigateable;
mod pickable;
mod picker;
mod remap;
pub mod scan;
mod space;

pub use ability::{Ability, AbilityChange, AbilitySource, AbilityStore, SubscriptionId};
pub use navigateable::{NavigateOptions, Navigateable};
pub use pickable::{PickOptions, PickStatus, Pickable, Replace};
pub use picker::EligiblePicker;
pub use remap::Remap;
pub use scan::{to_next_eligible, to_previous_eligible};
pub use space::{ListSpace, PlanePosition, PlaneSpace, Space, SpaceError, Traversal};
