//! Predicate-bounded view.

use core::fmt;

use crate::caps::{Capabilities, Strength};
use crate::error::{Error, Result};
use crate::seq::Sequence;

/// Behavioral switches for [`TakeUntil`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UntilConfig {
    /// Treat a source that ends before the predicate ever matches as an
    /// error instead of a clean end.
    pub or_throw: bool,
    /// After the first match, also advance the source past the entire
    /// matching run, so that it resumes at the first non-matching element.
    /// Takes effect only over single-pass sources; re-scannable sources are
    /// left positioned on the match instead.
    pub and_consume: bool,
    /// Declare the predicate non-repeatable (stateful in a way that makes a
    /// second evaluation over the same elements meaningless). Downgrades
    /// the view's advertised strength to single-pass.
    pub one_shot: bool,
}

/// Wraps `source` in a view of everything before the first element
/// `predicate` stops on.
pub fn take_until<S, P>(source: S, predicate: P) -> TakeUntil<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeUntil::new(source, predicate, UntilConfig::default())
}

/// [`take_until`] with explicit behavioral switches.
pub fn take_until_with<S, P>(source: S, predicate: P, config: UntilConfig) -> TakeUntil<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeUntil::new(source, predicate, config)
}

/// View of every element up to, and excluding, the first one the predicate
/// stops on. If it never stops, the view covers the whole source.
///
/// Where the view ends is decided lazily, at the query that reaches the
/// boundary, and the predicate runs at most once per position. The view's
/// own length is therefore never known up front: it reports no size and
/// serves no capability-gated accessors, whatever the source supports.
#[derive(Clone)]
pub struct TakeUntil<S, P> {
    source: S,
    predicate: P,
    config: UntilConfig,
    caps: Capabilities,
    yielded: usize,
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    /// Stop on the match and leave it in the source.
    Peeking {
        /// Predicate verdict for the current position, if already computed.
        verdict: Option<bool>,
    },
    /// Swallow the whole matching run once the first match is seen.
    Consuming { state: ConsumeState },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsumeState {
    /// Current head not probed yet.
    Start,
    /// Current head probed and found to be inside the view.
    Active,
    /// A match was found and its run consumed; the view ended cleanly.
    GracefullyEnded,
    /// The source ended before any match.
    PhysicallyExhausted,
}

impl<S, P> TakeUntil<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    pub fn new(source: S, predicate: P, config: UntilConfig) -> Self {
        let src = source.capabilities();
        let mut caps = Capabilities::new(src.strength, false);
        if config.one_shot {
            caps = caps.weakened_to(Strength::SinglePass);
        }
        let mode = if config.and_consume && src.is_single_pass() {
            Mode::Consuming {
                state: ConsumeState::Start,
            }
        } else {
            Mode::Peeking { verdict: None }
        };
        TakeUntil {
            source,
            predicate,
            config,
            caps,
            yielded: 0,
            mode,
        }
    }

    /// Returns the source, positioned wherever the view left it.
    ///
    /// After a clean end that is on the first match (peeking) or after the
    /// consumed matching run (consuming).
    pub fn into_source(self) -> S {
        self.source
    }

    /// Runs the consuming-mode probe: tests the head, swallows a matching
    /// run, and reports the state the cursor lands in.
    fn probe(source: &mut S, predicate: &mut P) -> Result<ConsumeState> {
        let mut matched = false;
        loop {
            match source.peek()? {
                Some(item) if predicate(item) => {
                    matched = true;
                    source.next()?;
                }
                Some(_) if matched => return Ok(ConsumeState::GracefullyEnded),
                Some(_) => return Ok(ConsumeState::Active),
                // A run cut short by the source end still ended gracefully.
                None if matched => return Ok(ConsumeState::GracefullyEnded),
                None => return Ok(ConsumeState::PhysicallyExhausted),
            }
        }
    }
}

impl<S, P> Sequence for TakeUntil<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn peek(&mut self) -> Result<Option<&S::Item>> {
        let Self {
            source,
            predicate,
            config,
            yielded,
            mode,
            ..
        } = self;
        match mode {
            Mode::Peeking { verdict } => match source.peek()? {
                Some(item) => {
                    if *verdict.get_or_insert_with(|| predicate(item)) {
                        Ok(None)
                    } else {
                        Ok(Some(item))
                    }
                }
                None if config.or_throw => Err(Error::UnexpectedEndOfInput { after: *yielded }),
                None => Ok(None),
            },
            Mode::Consuming { state } => {
                if matches!(state, ConsumeState::Start) {
                    *state = Self::probe(source, predicate)?;
                }
                match *state {
                    // Start cannot survive the probe above.
                    ConsumeState::Start | ConsumeState::Active => source.peek(),
                    ConsumeState::GracefullyEnded => Ok(None),
                    ConsumeState::PhysicallyExhausted if config.or_throw => {
                        Err(Error::UnexpectedEndOfInput { after: *yielded })
                    }
                    ConsumeState::PhysicallyExhausted => Ok(None),
                }
            }
        }
    }

    fn next(&mut self) -> Result<Option<S::Item>> {
        if self.peek()?.is_none() {
            return Ok(None);
        }
        let item = self.source.next()?;
        if item.is_some() {
            self.yielded += 1;
        }
        match &mut self.mode {
            // The verdict belonged to the position just left behind.
            Mode::Peeking { verdict } => *verdict = None,
            // The source must already sit past any terminator run when the
            // caller stops pulling, so every advance re-probes.
            Mode::Consuming { state } => {
                *state = Self::probe(&mut self.source, &mut self.predicate)?;
            }
        }
        Ok(item)
    }

    fn remaining(&self) -> Option<usize> {
        None
    }
}

impl<S: fmt::Debug, P> fmt::Debug for TakeUntil<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeUntil")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("yielded", &self.yielded)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "until_test.rs"]
mod until_test;
