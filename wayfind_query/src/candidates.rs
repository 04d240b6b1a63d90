// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of candidate text for a search.

use alloc::string::String;
use alloc::vec::Vec;

use wayfind_eligible::PlanePosition;

/// Supplies the text a query is scored against, per position.
///
/// Implemented for explicit candidate lists (`[T]`, `Vec<T>` for lists and
/// nested row vectors for planes) and for any text accessor closure
/// `Fn(P) -> impl AsRef<str>`. Positions without text score as empty strings.
pub trait CandidateSource<P> {
    /// Appends the text of `position` to `out`.
    fn write_text(&self, position: P, out: &mut String);
}

impl<T: AsRef<str>> CandidateSource<usize> for [T] {
    fn write_text(&self, position: usize, out: &mut String) {
        if let Some(text) = self.get(position) {
            out.push_str(text.as_ref());
        }
    }
}

impl<T: AsRef<str>> CandidateSource<usize> for Vec<T> {
    fn write_text(&self, position: usize, out: &mut String) {
        self.as_slice().write_text(position, out);
    }
}

impl<T: AsRef<str>> CandidateSource<PlanePosition> for [Vec<T>] {
    fn write_text(&self, position: PlanePosition, out: &mut String) {
        if let Some(row) = self.get(position.row) {
            row.write_text(position.column, out);
        }
    }
}

impl<T: AsRef<str>> CandidateSource<PlanePosition> for Vec<Vec<T>> {
    fn write_text(&self, position: PlanePosition, out: &mut String) {
        self.as_slice().write_text(position, out);
    }
}

impl<P, F, S> CandidateSource<P> for F
where
    F: Fn(P) -> S,
    S: AsRef<str>,
{
    fn write_text(&self, position: P, out: &mut String) {
        out.push_str(self(position).as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn text_of<P, C: CandidateSource<P> + ?Sized>(source: &C, position: P) -> String {
        let mut out = String::new();
        source.write_text(position, &mut out);
        out
    }

    #[test]
    fn explicit_lists_and_rows() {
        let list = vec!["foo", "bar"];
        assert_eq!(text_of(&list, 1), "bar");
        assert_eq!(text_of(&list, 5), "");
        let rows = vec![vec!["a".to_string()], vec!["b".to_string(), "c".to_string()]];
        assert_eq!(text_of(&rows, PlanePosition::new(1, 1)), "c");
        assert_eq!(text_of(&rows, PlanePosition::new(0, 1)), "");
    }

    #[test]
    fn accessor_closures() {
        let accessor = |i: usize| alloc::format!("item {i}");
        assert_eq!(text_of(&accessor, 3), "item 3");
    }
}
