// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The buffered query text and its auto-clear behavior.

use alloc::string::String;

use crate::timer::ClearTimer;

/// Delay after which a query clears itself, in milliseconds.
pub const DEFAULT_CLEAR_DELAY_MS: u64 = 500;

/// Options for [`Query::paste`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PasteOptions {
    /// Arm the clear timer after pasting.
    pub eventually_clears: bool,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            eventually_clears: true,
        }
    }
}

/// Options for [`Query::type_char`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeOptions {
    /// Re-arm the clear timer after typing.
    ///
    /// When `false`, typing cancels any pending clear so the text is kept
    /// until the next explicit [`Query::clear`] or paste.
    pub eventually_clears: bool,
}

impl Default for TypeOptions {
    fn default() -> Self {
        Self {
            eventually_clears: true,
        }
    }
}

/// Where a [`Query`] is in its clear cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryStatus {
    /// No clear is pending.
    Ready,
    /// The text will clear once the timer fires.
    Armed,
}

/// Typeahead text buffer.
///
/// ```rust
/// use wayfind_query::{PasteOptions, Query};
///
/// let mut query = Query::new();
/// query.paste("ba", 0, PasteOptions::default());
/// query.type_char('l', 100, Default::default());
/// assert_eq!(query.text(), "bal");
///
/// // Typing re-armed the clear for 100 + 500.
/// assert!(!query.tick(599));
/// assert!(query.tick(600));
/// assert_eq!(query.text(), "");
/// ```
#[derive(Clone, Debug)]
pub struct Query {
    text: String,
    timer: ClearTimer,
    clear_delay_ms: u64,
}

impl Default for Query {
    fn default() -> Self {
        Self::with_clear_delay(DEFAULT_CLEAR_DELAY_MS)
    }
}

impl Query {
    /// Creates an empty query with the default clear delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty query that clears `clear_delay_ms` after its last edit.
    #[must_use]
    pub fn with_clear_delay(clear_delay_ms: u64) -> Self {
        Self {
            text: String::new(),
            timer: ClearTimer::new(),
            clear_delay_ms,
        }
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clear delay in milliseconds.
    #[must_use]
    pub const fn clear_delay_ms(&self) -> u64 {
        self.clear_delay_ms
    }

    /// Whether a clear is pending.
    #[must_use]
    pub const fn status(&self) -> QueryStatus {
        if self.timer.is_armed() {
            QueryStatus::Armed
        } else {
            QueryStatus::Ready
        }
    }

    /// The clear timer.
    #[must_use]
    pub const fn timer(&self) -> &ClearTimer {
        &self.timer
    }

    /// Replaces the text wholesale.
    ///
    /// Any pending clear is cancelled; a new one is armed if
    /// `options.eventually_clears`.
    pub fn paste(&mut self, text: &str, now: u64, options: PasteOptions) {
        self.text.clear();
        self.text.push_str(text);
        self.rearm(now, options.eventually_clears);
    }

    /// Appends a character.
    ///
    /// By default this re-arms the clear timer, so the text clears
    /// `clear_delay_ms` after the last keystroke.
    pub fn type_char(&mut self, character: char, now: u64, options: TypeOptions) {
        self.text.push(character);
        self.rearm(now, options.eventually_clears);
    }

    /// Empties the text and cancels any pending clear.
    pub fn clear(&mut self) {
        self.timer.cancel();
        self.text.clear();
    }

    /// Advances time, clearing the text if the timer fires.
    ///
    /// Returns `true` if the text was cleared by this call.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.timer.poll(now) {
            log::debug!("query {:?} cleared after {}ms", self.text, self.clear_delay_ms);
            self.text.clear();
            true
        } else {
            false
        }
    }

    fn rearm(&mut self, now: u64, eventually_clears: bool) {
        if eventually_clears {
            self.timer.arm(now, self.clear_delay_ms);
        } else {
            self.timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEEP: PasteOptions = PasteOptions {
        eventually_clears: false,
    };

    #[test]
    fn paste_clears_after_delay() {
        let mut query = Query::new();
        query.paste("Baleada", 1_000, PasteOptions::default());
        assert_eq!(query.status(), QueryStatus::Armed);
        assert!(!query.tick(1_000 + DEFAULT_CLEAR_DELAY_MS - 1));
        assert_eq!(query.text(), "Baleada");
        assert!(query.tick(1_000 + DEFAULT_CLEAR_DELAY_MS + 1));
        assert_eq!(query.text(), "");
        assert_eq!(query.status(), QueryStatus::Ready);
    }

    #[test]
    fn paste_without_clearing_is_kept() {
        let mut query = Query::new();
        query.paste("Baleada", 0, KEEP);
        assert!(!query.tick(u64::MAX));
        assert_eq!(query.text(), "Baleada");
    }

    #[test]
    fn later_paste_supersedes_pending_clear() {
        let mut query = Query::with_clear_delay(100);
        query.paste("a", 0, PasteOptions::default());
        query.paste("b", 50, KEEP);
        assert!(!query.tick(1_000));
        assert_eq!(query.text(), "b");
    }

    #[test]
    fn typing_can_opt_out_of_clearing() {
        let mut query = Query::new();
        query.type_char('x', 0, TypeOptions::default());
        query.type_char(
            'y',
            10,
            TypeOptions {
                eventually_clears: false,
            },
        );
        assert_eq!(query.status(), QueryStatus::Ready);
        assert!(!query.tick(10_000));
        assert_eq!(query.text(), "xy");
        query.clear();
        assert!(query.is_empty());
    }
}
