//! The pull-based protocol every source and view speaks.
//!
//! A [`Sequence`] is its own cursor: [`peek`](Sequence::peek) answers "what
//! is the current element" without advancing, [`next`](Sequence::next)
//! yields it and moves on, and [`at_end`](Sequence::at_end) is the single
//! terminal test. All three are fallible so that views can surface underruns
//! lazily, at exactly the query that discovers them.
//!
//! Views are generic over `S: Sequence` and take their source by value. To
//! keep using a source after a view is done with it, either pass `&mut
//! source` (mutable references forward the whole protocol) or recover it
//! with the view's `into_source`.

use crate::caps::Capabilities;
use crate::error::Result;

/// An ordered, lazily traversed supply of elements.
///
/// The two required movements are [`peek`](Self::peek) and
/// [`next`](Self::next); everything else has a default in terms of them.
/// Sequences with more structure override the defaults: the capability
/// record advertises what a source supports, and the capability-gated
/// accessors must honor what the record claims.
///
/// # Accessor contract
///
/// A sequence whose [`capabilities`](Self::capabilities) report
/// [`Contiguous`](crate::caps::Strength::Contiguous) strength together with
/// `sized` must answer [`as_contiguous`](Self::as_contiguous), and one
/// reporting [`RandomAccess`](crate::caps::Strength::RandomAccess) or better
/// together with `sized` must answer [`peek_at`](Self::peek_at), stably
/// until the sequence is exhausted. Everything weaker returns `None` from
/// both.
pub trait Sequence {
    /// Element type produced by the sequence.
    type Item;

    /// What this sequence supports, decided once per value.
    ///
    /// The record must stay constant for the lifetime of the value;
    /// adaptors read it at construction and never again.
    fn capabilities(&self) -> Capabilities;

    /// Borrows the current element without advancing.
    ///
    /// Idempotent: repeated calls return the same element and perform no
    /// visible work beyond the first. `Ok(None)` means the sequence is over.
    fn peek(&mut self) -> Result<Option<&Self::Item>>;

    /// Yields the current element and advances past it.
    fn next(&mut self) -> Result<Option<Self::Item>>;

    /// Number of elements left, when known in constant time.
    ///
    /// `Some` exactly when [`capabilities`](Self::capabilities) report
    /// `sized`.
    fn remaining(&self) -> Option<usize>;

    /// The terminal test: true once the sequence holds no more elements.
    ///
    /// Idempotent for the same reasons [`peek`](Self::peek) is.
    fn at_end(&mut self) -> Result<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Skips up to `n` elements, returning how many were actually skipped.
    ///
    /// A short count means the sequence ended. Sequences with random access
    /// override this with a constant-time jump.
    fn advance_by(&mut self, n: usize) -> Result<usize> {
        let mut stepped = 0;
        while stepped < n {
            if self.next()?.is_none() {
                break;
            }
            stepped += 1;
        }
        Ok(stepped)
    }

    /// Borrows the remaining elements as one slice.
    ///
    /// `None` unless the capability record claims contiguous strength with a
    /// known size.
    fn as_contiguous(&self) -> Option<&[Self::Item]> {
        None
    }

    /// Borrows the element `offset` positions ahead without advancing.
    ///
    /// `None` unless the capability record claims random-access strength
    /// with a known size, and `None` past the end.
    fn peek_at(&self, offset: usize) -> Option<&Self::Item> {
        let _ = offset;
        None
    }

    /// Adapts this sequence into an [`Iterator`] of [`Result`] items.
    fn into_items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items::new(self)
    }
}

/// Mutable references forward the whole protocol, so a view can borrow its
/// source instead of owning it.
impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn peek(&mut self) -> Result<Option<&Self::Item>> {
        (**self).peek()
    }

    fn next(&mut self) -> Result<Option<Self::Item>> {
        (**self).next()
    }

    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }

    fn at_end(&mut self) -> Result<bool> {
        (**self).at_end()
    }

    fn advance_by(&mut self, n: usize) -> Result<usize> {
        (**self).advance_by(n)
    }

    fn as_contiguous(&self) -> Option<&[Self::Item]> {
        (**self).as_contiguous()
    }

    fn peek_at(&self, offset: usize) -> Option<&Self::Item> {
        (**self).peek_at(offset)
    }
}

/// Iterator over a sequence's elements, created by
/// [`Sequence::into_items`].
///
/// Yields `Ok` per element and at most one `Err`; after an error the
/// iterator is fused and yields nothing further.
#[derive(Debug, Clone)]
pub struct Items<S> {
    seq: S,
    failed: bool,
}

impl<S: Sequence> Items<S> {
    pub(crate) fn new(seq: S) -> Self {
        Items { seq, failed: false }
    }

    /// Returns the underlying sequence, positioned wherever iteration left
    /// it.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Items<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.seq.next() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // An error item takes the place of a missing element, so a known
        // remaining count is still an upper bound.
        (0, self.seq.remaining())
    }
}
