//! Classification of how a sequence may be traversed.
//!
//! Every [`Sequence`](crate::seq::Sequence) reports a [`Capabilities`] record
//! describing the strongest traversal it supports and whether its length is
//! known up front. Adaptors read the record once, at construction, and commit
//! to a strategy; nothing re-inspects the source mid-traversal.

/// Traversal strength of a sequence, ordered from weakest to strongest.
///
/// A sequence offering some strength also offers everything below it, so
/// comparisons like `strength >= Strength::RandomAccess` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    /// Elements can be visited once, in order. Reading is consuming and the
    /// sequence cannot be restarted.
    SinglePass,
    /// Traversal can be forked and replayed. Two cursors over the same
    /// sequence observe the same elements.
    Forward,
    /// Traversal can also step backwards.
    Bidirectional,
    /// Any position is reachable in constant time.
    RandomAccess,
    /// The remaining elements are laid out contiguously in memory and can be
    /// borrowed as a slice.
    Contiguous,
}

/// What a sequence can do, carried as a plain value.
///
/// Computed once per source and stored by adaptors at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Strongest supported traversal pattern.
    pub strength: Strength,
    /// Whether the exact number of remaining elements is known in constant
    /// time.
    pub sized: bool,
}

static_assertions::assert_eq_size!(Capabilities, [u8; 2]);

impl Capabilities {
    pub const fn new(strength: Strength, sized: bool) -> Self {
        Capabilities { strength, sized }
    }

    /// True if this sequence offers `required` strength or better.
    pub fn meets(self, required: Strength) -> bool {
        self.strength >= required
    }

    /// True for sources that cannot be re-traversed.
    pub fn is_single_pass(self) -> bool {
        self.strength == Strength::SinglePass
    }

    /// Caps the strength at `limit`, keeping everything else.
    pub fn weakened_to(self, limit: Strength) -> Self {
        Capabilities {
            strength: self.strength.min(limit),
            ..self
        }
    }
}
