//! Representation-selecting entry points for count-bounded views.
//!
//! [`take`] and [`take_with`] read the source's capability record once and
//! wrap it in the cheapest representation that can honor the bound: a plain
//! subslice window when the elements sit contiguously in memory, an index
//! window when they are random-access, and the general lazy
//! [`Take`] view otherwise. All three behave identically element for
//! element; the difference is what the fast paths cost.
//!
//! Bounds are resolved against sized sources up front, so the fast
//! representations carry no error paths at all. What remains lazy is only
//! what has to be: underrun discovery over sources of unknown length.

use tracing::{debug, trace};

use crate::caps::{Capabilities, Strength};
use crate::error::{Error, Result};
use crate::seq::Sequence;
use crate::views::take::{Take, TakeConfig};

/// Bounds `source` to its first `count` elements, silently.
///
/// A short source gives a short view; nothing errors. For the reporting
/// variants use [`take_with`].
pub fn take<S: Sequence>(source: S, count: usize) -> Bounded<S> {
    let count = match source.remaining() {
        Some(available) => count.min(available),
        None => count,
    };
    select(source, count, TakeConfig::default())
}

/// Bounds `source` to its first `count` elements with explicit behavioral
/// switches.
///
/// When the source length is known the bound is resolved eagerly: an
/// underrun-reporting view rejects an oversized `count` here, as
/// [`Error::InvalidBound`], and a silent one clamps it. Sources of unknown
/// length defer the question to traversal, where the underrun surfaces as
/// [`Error::UnexpectedEndOfInput`] if the view is configured to report it.
pub fn take_with<S: Sequence>(source: S, count: usize, config: TakeConfig) -> Result<Bounded<S>> {
    let count = match source.remaining() {
        Some(available) if count > available => {
            if config.or_throw {
                return Err(Error::InvalidBound {
                    requested: count,
                    available,
                });
            }
            debug!(requested = count, available, "clamping bound to available elements");
            available
        }
        _ => count,
    };
    Ok(select(source, count, config))
}

/// Picks the concrete representation from the capability record. `count`
/// must already be resolved against sized sources.
fn select<S: Sequence>(source: S, count: usize, config: TakeConfig) -> Bounded<S> {
    let caps = source.capabilities();
    let bounded = if caps.sized && caps.meets(Strength::Contiguous) {
        Bounded::Slice(SlicePrefix::new(source, count))
    } else if caps.sized && caps.meets(Strength::RandomAccess) {
        Bounded::Range(RangePrefix::new(source, count))
    } else {
        Bounded::General(Take::new_unchecked(source, count, config))
    };
    trace!(count, repr = bounded.repr_name(), "selected bounded representation");
    bounded
}

/// Count-bounded view with the representation picked for the source.
///
/// Returned by [`take`] and [`take_with`]. Whichever variant was selected,
/// the value traverses like the general view; the variants only expose
/// their extra structure, such as [`Bounded::as_slice`] for contiguous
/// sources.
#[derive(Debug, Clone)]
pub enum Bounded<S> {
    /// Contiguous sized source: the prefix is an addressable subslice.
    Slice(SlicePrefix<S>),
    /// Random-access sized source: the prefix is an index window.
    Range(RangePrefix<S>),
    /// Anything else: the general lazy view.
    General(Take<S>),
}

impl<S: Sequence> Bounded<S> {
    /// The whole not-yet-consumed prefix as one slice, for the contiguous
    /// representation.
    pub fn as_slice(&self) -> Option<&[S::Item]> {
        match self {
            Bounded::Slice(view) => Some(view.as_slice()),
            Bounded::Range(_) | Bounded::General(_) => None,
        }
    }

    /// Returns the source, positioned wherever the view left it.
    pub fn into_source(self) -> S {
        match self {
            Bounded::Slice(view) => view.into_source(),
            Bounded::Range(view) => view.into_source(),
            Bounded::General(view) => view.into_source(),
        }
    }

    fn repr_name(&self) -> &'static str {
        match self {
            Bounded::Slice(_) => "slice",
            Bounded::Range(_) => "range",
            Bounded::General(_) => "general",
        }
    }
}

impl<S: Sequence> Sequence for Bounded<S> {
    type Item = S::Item;

    fn capabilities(&self) -> Capabilities {
        match self {
            Bounded::Slice(view) => view.capabilities(),
            Bounded::Range(view) => view.capabilities(),
            Bounded::General(view) => view.capabilities(),
        }
    }

    fn peek(&mut self) -> Result<Option<&Self::Item>> {
        match self {
            Bounded::Slice(view) => view.peek(),
            Bounded::Range(view) => view.peek(),
            Bounded::General(view) => view.peek(),
        }
    }

    fn next(&mut self) -> Result<Option<Self::Item>> {
        match self {
            Bounded::Slice(view) => view.next(),
            Bounded::Range(view) => view.next(),
            Bounded::General(view) => view.next(),
        }
    }

    fn remaining(&self) -> Option<usize> {
        match self {
            Bounded::Slice(view) => view.remaining(),
            Bounded::Range(view) => view.remaining(),
            Bounded::General(view) => view.remaining(),
        }
    }

    fn advance_by(&mut self, n: usize) -> Result<usize> {
        match self {
            Bounded::Slice(view) => view.advance_by(n),
            Bounded::Range(view) => view.advance_by(n),
            Bounded::General(view) => view.advance_by(n),
        }
    }

    fn as_contiguous(&self) -> Option<&[Self::Item]> {
        match self {
            Bounded::Slice(view) => view.as_contiguous(),
            Bounded::Range(view) => view.as_contiguous(),
            Bounded::General(view) => view.as_contiguous(),
        }
    }

    fn peek_at(&self, offset: usize) -> Option<&Self::Item> {
        match self {
            Bounded::Slice(view) => view.peek_at(offset),
            Bounded::Range(view) => view.peek_at(offset),
            Bounded::General(view) => view.peek_at(offset),
        }
    }
}

/// Count-bounded view over a contiguous sized source.
///
/// The cheapest case: the bound was resolved at construction, so traversal
/// is a plain countdown and the whole prefix stays addressable through
/// [`as_slice`](SlicePrefix::as_slice) without touching the cursor.
#[derive(Debug, Clone)]
pub struct SlicePrefix<S> {
    source: S,
    left: usize,
}

impl<S: Sequence> SlicePrefix<S> {
    /// `left` must already be clamped to the source length.
    fn new(source: S, left: usize) -> Self {
        SlicePrefix { source, left }
    }

    /// The not-yet-consumed part of the prefix as one slice.
    pub fn as_slice(&self) -> &[S::Item] {
        let rest = self.source.as_contiguous().unwrap_or(&[]);
        &rest[..self.left.min(rest.len())]
    }

    pub fn len(&self) -> usize {
        self.left
    }

    pub fn is_empty(&self) -> bool {
        self.left == 0
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: Sequence> Sequence for SlicePrefix<S> {
    type Item = S::Item;

    fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    fn peek(&mut self) -> Result<Option<&S::Item>> {
        if self.left == 0 {
            return Ok(None);
        }
        self.source.peek()
    }

    fn next(&mut self) -> Result<Option<S::Item>> {
        if self.left == 0 {
            return Ok(None);
        }
        let item = self.source.next()?;
        if item.is_some() {
            self.left -= 1;
        }
        Ok(item)
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.left)
    }

    fn advance_by(&mut self, n: usize) -> Result<usize> {
        let stepped = self.source.advance_by(n.min(self.left))?;
        self.left -= stepped;
        Ok(stepped)
    }

    fn as_contiguous(&self) -> Option<&[S::Item]> {
        Some(self.as_slice())
    }

    fn peek_at(&self, offset: usize) -> Option<&S::Item> {
        if offset < self.left {
            self.source.peek_at(offset)
        } else {
            None
        }
    }
}

/// Count-bounded view over a random-access sized source.
///
/// An index window with a definite size and constant-time
/// [`peek_at`](Sequence::peek_at), for sources that are addressable but not
/// contiguous.
#[derive(Debug, Clone)]
pub struct RangePrefix<S> {
    source: S,
    left: usize,
}

impl<S: Sequence> RangePrefix<S> {
    /// `left` must already be clamped to the source length.
    fn new(source: S, left: usize) -> Self {
        RangePrefix { source, left }
    }

    pub fn len(&self) -> usize {
        self.left
    }

    pub fn is_empty(&self) -> bool {
        self.left == 0
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: Sequence> Sequence for RangePrefix<S> {
    type Item = S::Item;

    fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    fn peek(&mut self) -> Result<Option<&S::Item>> {
        if self.left == 0 {
            return Ok(None);
        }
        self.source.peek()
    }

    fn next(&mut self) -> Result<Option<S::Item>> {
        if self.left == 0 {
            return Ok(None);
        }
        let item = self.source.next()?;
        if item.is_some() {
            self.left -= 1;
        }
        Ok(item)
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.left)
    }

    fn advance_by(&mut self, n: usize) -> Result<usize> {
        let stepped = self.source.advance_by(n.min(self.left))?;
        self.left -= stepped;
        Ok(stepped)
    }

    fn peek_at(&self, offset: usize) -> Option<&S::Item> {
        if offset < self.left {
            self.source.peek_at(offset)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "bounded_test.rs"]
mod bounded_test;
