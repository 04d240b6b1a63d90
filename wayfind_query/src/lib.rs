// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Query: typeahead search for list and grid widgets.
//!
//! This crate layers fuzzy text search on top of [`wayfind_eligible`]. A query is
//! a small text buffer that users build by typing or pasting and that clears
//! itself a short while after the last edit. Searching scores every candidate
//! position against that text and ranks the results; typeahead helpers then
//! jump an [`EligiblePicker`](wayfind_eligible::EligiblePicker) to the best
//! eligible match.
//!
//! - [`Query`]: the text buffer, with a [`ClearTimer`] driven by host timestamps.
//! - [`Scorer`]: fuzzy subsequence scoring (via `nucleo-matcher`); `0` means no match.
//! - [`CandidateSource`]: candidate text, either explicit strings or an accessor closure.
//! - [`ListQuery`] / [`PlaneQuery`]: one ranked result list per list, or per plane row.
//! - [`typeahead`]: choosing and applying the jump target.
//!
//! ## Minimal example
//!
//! ```rust
//! use wayfind_eligible::{Ability, EligiblePicker, ListSpace};
//! use wayfind_query::{ListQuery, TypeOptions};
//!
//! let options = ["Apple", "Banana", "Blueberry", "Cherry"];
//! let space = ListSpace::new(options.len());
//! let mut listbox = EligiblePicker::new(space, Ability::Enabled);
//! let mut typeahead = ListQuery::new();
//!
//! // The user types "bl" at t = 0ms and t = 80ms.
//! typeahead.type_char('b', 0, TypeOptions::default());
//! typeahead.type_char('l', 80, TypeOptions::default());
//! typeahead.search(&space, &options[..]);
//! assert_eq!(typeahead.jump_pick(&mut listbox), Some(Ability::Enabled));
//! assert_eq!(listbox.location(), Some(2));
//!
//! // Half a second after the last keystroke, the query clears itself.
//! assert!(typeahead.tick(580));
//! assert_eq!(typeahead.query().text(), "");
//! ```
//!
//! Time is always passed in by the host as milliseconds; nothing in this crate
//! reads a clock or spawns a task.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod candidates;
mod query;
mod score;
mod search;
mod timer;
pub mod typeahead;

pub use candidates::CandidateSource;
pub use query::{DEFAULT_CLEAR_DELAY_MS, PasteOptions, Query, QueryStatus, TypeOptions};
pub use score::Scorer;
pub use search::{ListQuery, PlaneQuery, SearchResult};
pub use timer::ClearTimer;
