//! Contiguous in-memory source.

use crate::caps::{Capabilities, Strength};
use crate::error::Result;
use crate::seq::Sequence;

/// Sequence over a borrowed slice.
///
/// The strongest kind of source: contiguous, random-access, and sized.
/// Elements are cloned out on [`next`](Sequence::next), so element types
/// are expected to be cheap to copy (bytes, chars, small tokens).
#[derive(Debug, Clone)]
pub struct SliceSeq<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceSeq<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        SliceSeq { items, pos: 0 }
    }

    /// The elements not yet consumed, borrowed for the full source lifetime.
    pub fn rest(&self) -> &'a [T] {
        &self.items[self.pos..]
    }
}

impl<T: Clone> Sequence for SliceSeq<'_, T> {
    type Item = T;

    fn capabilities(&self) -> Capabilities {
        Capabilities::new(Strength::Contiguous, true)
    }

    fn peek(&mut self) -> Result<Option<&T>> {
        Ok(self.items.get(self.pos))
    }

    fn next(&mut self) -> Result<Option<T>> {
        let item = self.items.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        Ok(item)
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.items.len() - self.pos)
    }

    fn advance_by(&mut self, n: usize) -> Result<usize> {
        let stepped = n.min(self.items.len() - self.pos);
        self.pos += stepped;
        Ok(stepped)
    }

    fn as_contiguous(&self) -> Option<&[T]> {
        Some(self.rest())
    }

    fn peek_at(&self, offset: usize) -> Option<&T> {
        self.items.get(self.pos.checked_add(offset)?)
    }
}
