//! Random-access source without contiguity.

use alloc::collections::VecDeque;

use crate::caps::{Capabilities, Strength};
use crate::error::Result;
use crate::seq::Sequence;

/// Sequence over a borrowed [`VecDeque`].
///
/// Deques are indexable in constant time but their storage may wrap around,
/// so this source reports random-access strength without contiguity. Useful
/// wherever the distinction between the two tiers matters.
#[derive(Debug, Clone)]
pub struct DequeSeq<'a, T> {
    items: &'a VecDeque<T>,
    pos: usize,
}

impl<'a, T> DequeSeq<'a, T> {
    pub fn new(items: &'a VecDeque<T>) -> Self {
        DequeSeq { items, pos: 0 }
    }
}

impl<T: Clone> Sequence for DequeSeq<'_, T> {
    type Item = T;

    fn capabilities(&self) -> Capabilities {
        Capabilities::new(Strength::RandomAccess, true)
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

    fn peek_at(&self, offset: usize) -> Option<&T> {
        self.items.get(self.pos.checked_add(offset)?)
    }
}
