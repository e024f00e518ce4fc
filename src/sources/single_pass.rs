//! One-shot stream source.

use crate::caps::{Capabilities, Strength};
use crate::error::Result;
use crate::seq::Sequence;

/// Sequence over an arbitrary [`Iterator`], visited once.
///
/// A one-element lookahead slot makes [`peek`](Sequence::peek) legal over a
/// stream that cannot otherwise be inspected without consuming it. The
/// source reports a known size only when the iterator's `size_hint` is
/// exact; the count is tracked across pulls, which keeps exact-mode bounds
/// usable over streams like `vec.into_iter()`.
#[derive(Debug, Clone)]
pub struct SinglePass<I: Iterator> {
    iter: I,
    /// Outer `Some` means the head was already pulled; inner `None` means
    /// the iterator is exhausted and must not be polled again.
    peeked: Option<Option<I::Item>>,
    remaining: Option<usize>,
}

impl<I: Iterator> SinglePass<I> {
    pub fn new(iter: I) -> Self {
        let remaining = match iter.size_hint() {
            (lo, Some(hi)) if lo == hi => Some(lo),
            _ => None,
        };
        SinglePass {
            iter,
            peeked: None,
            remaining,
        }
    }

    /// Dissolves the wrapper into the element already sitting in the
    /// lookahead slot, if any, and the rest of the iterator.
    pub fn into_inner(self) -> (Option<I::Item>, I) {
        (self.peeked.flatten(), self.iter)
    }
}

impl<I: Iterator> Sequence for SinglePass<I> {
    type Item = I::Item;

    fn capabilities(&self) -> Capabilities {
        Capabilities::new(Strength::SinglePass, self.remaining.is_some())
    }

    fn peek(&mut self) -> Result<Option<&I::Item>> {
        let iter = &mut self.iter;
        Ok(self.peeked.get_or_insert_with(|| iter.next()).as_ref())
    }

    fn next(&mut self) -> Result<Option<I::Item>> {
        let pulled = match self.peeked.take() {
            Some(slot) => slot,
            None => self.iter.next(),
        };
        match pulled {
            Some(item) => {
                if let Some(n) = &mut self.remaining {
                    *n = n.saturating_sub(1);
                }
                Ok(Some(item))
            }
            None => {
                // Remember exhaustion; the iterator is never polled past its
                // first None.
                self.peeked = Some(None);
                Ok(None)
            }
        }
    }

    fn remaining(&self) -> Option<usize> {
        self.remaining
    }
}
