//! Count-bounded view.

use crate::caps::Capabilities;
use crate::error::{Error, Result};
use crate::seq::Sequence;

/// Behavioral switches for [`Take`].
///
/// The default is the silent variant: stop after the bound, or earlier if
/// the source runs out first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TakeConfig {
    /// Promise that the bound is the view's exact length. The view then
    /// reports a definite size even over sources of unknown length.
    pub exactly: bool,
    /// Treat a source that ends before the bound as an error instead of a
    /// short view.
    pub or_throw: bool,
}

/// View of at most a fixed number of elements from the front of a sequence.
///
/// Preserves the source's traversal strength; adds a definite size in exact
/// mode. Created by [`Take::new`], or with representation selection on top
/// by [`take`](crate::bounded::take) and
/// [`take_with`](crate::bounded::take_with).
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    target: usize,
    left: usize,
    config: TakeConfig,
    caps: Capabilities,
}

impl<S: Sequence> Take<S> {
    /// Wraps `source` in a view of its first `count` elements.
    ///
    /// The only eager failure is the fully strict combination: an exact,
    /// underrun-reporting view over a source that provably holds fewer than
    /// `count` elements. Every other configuration constructs and reports
    /// problems lazily, if at all.
    pub fn new(source: S, count: usize, config: TakeConfig) -> Result<Self> {
        if config.exactly && config.or_throw {
            if let Some(available) = source.remaining() {
                if available < count {
                    return Err(Error::InvalidBound {
                        requested: count,
                        available,
                    });
                }
            }
        }
        Ok(Self::new_unchecked(source, count, config))
    }

    /// Constructor for callers that already resolved `count` against the
    /// source length.
    pub(crate) fn new_unchecked(source: S, count: usize, config: TakeConfig) -> Self {
        let src = source.capabilities();
        let caps = Capabilities::new(src.strength, config.exactly || src.sized);
        Take {
            source,
            target: count,
            left: count,
            config,
            caps,
        }
    }

    /// Elements yielded so far.
    fn taken(&self) -> usize {
        self.target - self.left
    }

    /// Returns the source, positioned wherever the view left it.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn peek(&mut self) -> Result<Option<&S::Item>> {
        // Bound first: a spent view is over regardless of what the source
        // still holds, and a zero bound must never touch the source.
        if self.left == 0 {
            return Ok(None);
        }
        let taken = self.taken();
        let or_throw = self.config.or_throw;
        match self.source.peek()? {
            Some(item) => Ok(Some(item)),
            None if or_throw => Err(Error::UnexpectedEndOfInput { after: taken }),
            None => Ok(None),
        }
    }

    fn next(&mut self) -> Result<Option<S::Item>> {
        if self.left == 0 {
            return Ok(None);
        }
        match self.source.next()? {
            Some(item) => {
                self.left -= 1;
                Ok(Some(item))
            }
            None if self.config.or_throw => Err(Error::UnexpectedEndOfInput {
                after: self.taken(),
            }),
            None => Ok(None),
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.config.exactly {
            // Exact views are the size they promised, start to finish.
            Some(self.left)
        } else {
            self.source.remaining().map(|n| n.min(self.left))
        }
    }

    fn advance_by(&mut self, n: usize) -> Result<usize> {
        let want = n.min(self.left);
        let stepped = self.source.advance_by(want)?;
        self.left -= stepped;
        if stepped < want && self.config.or_throw {
            return Err(Error::UnexpectedEndOfInput {
                after: self.taken(),
            });
        }
        Ok(stepped)
    }

    fn as_contiguous(&self) -> Option<&[S::Item]> {
        let rest = self.source.as_contiguous()?;
        Some(&rest[..self.left.min(rest.len())])
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
#[path = "take_test.rs"]
mod take_test;
