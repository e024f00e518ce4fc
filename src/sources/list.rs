//! Bidirectional source without random access.

use alloc::collections::LinkedList;
use alloc::collections::linked_list;

use crate::caps::{Capabilities, Strength};
use crate::error::Result;
use crate::seq::Sequence;

/// Sequence over a borrowed [`LinkedList`].
///
/// Linked nodes can be walked either way but not indexed, so this source
/// reports bidirectional strength: stronger than a stream, weaker than
/// anything addressable. Bounding it always falls through to the general
/// lazy view.
#[derive(Debug, Clone)]
pub struct ListSeq<'a, T> {
    iter: linked_list::Iter<'a, T>,
    left: usize,
}

impl<'a, T> ListSeq<'a, T> {
    pub fn new(items: &'a LinkedList<T>) -> Self {
        ListSeq {
            iter: items.iter(),
            left: items.len(),
        }
    }
}

impl<T: Clone> Sequence for ListSeq<'_, T> {
    type Item = T;

    fn capabilities(&self) -> Capabilities {
        Capabilities::new(Strength::Bidirectional, true)
    }

    fn peek(&mut self) -> Result<Option<&T>> {
        // Node iterators fork cheaply; peeking walks a throwaway copy.
        Ok(self.iter.clone().next())
    }

    fn next(&mut self) -> Result<Option<T>> {
        let item = self.iter.next().cloned();
        if item.is_some() {
            self.left -= 1;
        }
        Ok(item)
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.left)
    }
}
