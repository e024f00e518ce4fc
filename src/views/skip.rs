//! Prefix-eliding view.

use core::mem;

use crate::caps::Capabilities;
use crate::error::Result;
use crate::seq::Sequence;

/// Wraps `source` in a view of everything after its first `count` elements.
pub fn skip<S: Sequence>(source: S, count: usize) -> Skip<S> {
    Skip::new(source, count)
}

/// View of a sequence with its first elements elided.
///
/// The counterpart of [`Take`](crate::views::Take). Skipping past the end
/// yields an empty view; there is no erroring variant. The skip itself is
/// lazy: nothing is advanced until the first query, and the read-only
/// accessors re-index around the pending prefix without advancing at all.
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    pending: usize,
}

impl<S: Sequence> Skip<S> {
    pub fn new(source: S, count: usize) -> Self {
        Skip {
            source,
            pending: count,
        }
    }

    /// Returns the source, applying any still-pending skip first.
    pub fn into_source(mut self) -> Result<S> {
        self.settle()?;
        Ok(self.source)
    }

    /// Applies the pending skip to the source.
    fn settle(&mut self) -> Result<()> {
        if self.pending > 0 {
            let n = mem::take(&mut self.pending);
            self.source.advance_by(n)?;
        }
        Ok(())
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    fn peek(&mut self) -> Result<Option<&S::Item>> {
        self.settle()?;
        self.source.peek()
    }

    fn next(&mut self) -> Result<Option<S::Item>> {
        self.settle()?;
        self.source.next()
    }

    fn remaining(&self) -> Option<usize> {
        self.source
            .remaining()
            .map(|n| n.saturating_sub(self.pending))
    }

    fn advance_by(&mut self, n: usize) -> Result<usize> {
        self.settle()?;
        self.source.advance_by(n)
    }

    fn as_contiguous(&self) -> Option<&[S::Item]> {
        let rest = self.source.as_contiguous()?;
        Some(rest.get(self.pending..).unwrap_or(&[]))
    }

    fn peek_at(&self, offset: usize) -> Option<&S::Item> {
        self.source.peek_at(offset.checked_add(self.pending)?)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sources::{SinglePass, SliceSeq};
    use crate::views::{Take, TakeConfig};

    fn drain<S: Sequence>(mut view: S) -> Vec<S::Item> {
        let mut out = Vec::new();
        while let Some(item) = view.next().unwrap() {
            out.push(item);
        }
        out
    }

    #[test]
    fn elides_the_prefix() {
        assert_eq!(drain(skip(SliceSeq::new(b"abcdef"), 2)), b"cdef");
        assert_eq!(drain(skip(SliceSeq::new(b"abcdef"), 0)), b"abcdef");
    }

    #[test]
    fn skipping_past_the_end_is_empty_not_an_error() {
        let mut view = skip(SliceSeq::new(b"ab"), 9);
        assert!(view.at_end().unwrap());
        assert_eq!(view.remaining(), Some(0));
    }

    #[test]
    fn nothing_is_advanced_before_the_first_query() {
        let pulls = Cell::new(0u32);
        let iter = (0..6).inspect(|_| pulls.set(pulls.get() + 1));
        let mut view = skip(SinglePass::new(iter), 3);
        assert_eq!(pulls.get(), 0);
        assert_eq!(view.next().unwrap(), Some(3));
    }

    #[test]
    fn accessors_reindex_without_advancing() {
        let mut source = SliceSeq::new(b"abcdef");
        let view = skip(&mut source, 2);
        assert_eq!(view.as_contiguous(), Some(&b"cdef"[..]));
        assert_eq!(view.peek_at(0), Some(&b'c'));
        assert_eq!(view.peek_at(3), Some(&b'f'));
        assert_eq!(view.peek_at(4), None);
        drop(view);
        // Only reads so far, so the source has not moved.
        assert_eq!(source.rest(), b"abcdef");
    }

    #[test]
    fn sizing_saturates() {
        let view = skip(SliceSeq::new(b"abc"), 2);
        assert_eq!(view.remaining(), Some(1));
        let view = skip(SliceSeq::new(b"abc"), 7);
        assert_eq!(view.remaining(), Some(0));
    }

    #[test]
    fn composes_with_take_into_a_window() {
        let window = Take::new(
            skip(SliceSeq::new(b"abcdef"), 2),
            3,
            TakeConfig::default(),
        )
        .unwrap();
        assert_eq!(drain(window), b"cde");
    }

    #[test]
    fn into_source_applies_the_pending_skip() {
        let source = skip(SliceSeq::new(b"abcdef"), 4).into_source().unwrap();
        assert_eq!(source.rest(), b"ef");
    }
}
